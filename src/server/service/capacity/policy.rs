use crate::{model::sponsorship::SponsorshipType, server::model::capacity::CapacityConfig};

/// Slot limits and inventory gates per sponsorship type.
///
/// Holds no state beyond its configuration; the joint enforcement of both rules lives in
/// [`SlotAvailabilityService`](super::availability::SlotAvailabilityService).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityPolicy {
    config: CapacityConfig,
}

impl CapacityPolicy {
    /// Creates a new instance of [`CapacityPolicy`]
    pub fn new(config: CapacityConfig) -> Self {
        Self { config }
    }

    /// Maximum number of concurrent listings plus holds in one scope of `kind`.
    pub fn max_slots(&self, kind: SponsorshipType) -> u64 {
        match kind {
            SponsorshipType::MainSponsor => self.config.max_main_slots,
            SponsorshipType::CategorySponsor => self.config.max_category_slots,
            SponsorshipType::SubcategorySponsor => self.config.max_subcategory_slots,
        }
    }

    /// Minimum sellable entries required in a scope before `kind` can be sold there.
    ///
    /// Main sponsorship is site-wide and has no inventory gate.
    pub fn min_inventory(&self, kind: SponsorshipType) -> Option<u64> {
        match kind {
            SponsorshipType::MainSponsor => None,
            SponsorshipType::CategorySponsor => Some(self.config.min_category_inventory),
            SponsorshipType::SubcategorySponsor => Some(self.config.min_subcategory_inventory),
        }
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self::new(CapacityConfig::default())
    }
}
