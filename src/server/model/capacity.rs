use crate::{model::sponsorship::AvailabilityDto, server::model::tier::SponsorshipTier};

/// Slot limits and inventory gates for each sponsorship tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityConfig {
    pub max_main_slots: u64,
    pub max_category_slots: u64,
    pub max_subcategory_slots: u64,
    pub min_category_inventory: u64,
    pub min_subcategory_inventory: u64,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            max_main_slots: 3,
            max_category_slots: 1,
            max_subcategory_slots: 1,
            min_category_inventory: 10,
            min_subcategory_inventory: 10,
        }
    }
}

/// Snapshot of slot usage for one tier at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotAvailability {
    pub tier: SponsorshipTier,
    pub max_slots: u64,
    pub active_listings: u64,
    pub active_reservations: u64,
    /// `None` for main sponsorship, which has no inventory gate
    pub min_inventory: Option<u64>,
    pub sellable_entries: Option<u64>,
}

impl SlotAvailability {
    pub fn capacity_ok(&self) -> bool {
        self.active_listings + self.active_reservations < self.max_slots
    }

    pub fn inventory_ok(&self) -> bool {
        match (self.min_inventory, self.sellable_entries) {
            (Some(min), Some(sellable)) => sellable >= min,
            _ => true,
        }
    }

    pub fn can_claim(&self) -> bool {
        self.capacity_ok() && self.inventory_ok()
    }
}

impl From<SlotAvailability> for AvailabilityDto {
    fn from(availability: SlotAvailability) -> Self {
        Self {
            sponsorship_type: availability.tier.kind(),
            type_id: availability.tier.scope_id(),
            max_slots: availability.max_slots,
            active_listings: availability.active_listings,
            active_reservations: availability.active_reservations,
            min_inventory: availability.min_inventory,
            sellable_entries: availability.sellable_entries,
            can_claim: availability.can_claim(),
        }
    }
}
