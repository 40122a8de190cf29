//! Sponsorship tiers and their capacity pool keys.

use crate::{model::sponsorship::SponsorshipType, server::error::sponsorship::SponsorshipError};

/// A sponsorship type combined with its scope, identifying one capacity pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SponsorshipTier {
    Main,
    Category(i32),
    Subcategory(i32),
}

impl SponsorshipTier {
    /// Build a tier from a sponsorship type and optional scope id.
    ///
    /// Main sponsorship has no scope, so any supplied id is ignored. Category and subcategory
    /// tiers require a positive id.
    ///
    /// # Returns
    /// - `Ok(SponsorshipTier)` - Normalized tier
    /// - `Err(SponsorshipError::InvalidScope)` - Scoped tier without a positive id
    pub fn new(kind: SponsorshipType, type_id: Option<i32>) -> Result<Self, SponsorshipError> {
        match (kind, type_id) {
            (SponsorshipType::MainSponsor, _) => Ok(Self::Main),
            (SponsorshipType::CategorySponsor, Some(id)) if id > 0 => Ok(Self::Category(id)),
            (SponsorshipType::SubcategorySponsor, Some(id)) if id > 0 => Ok(Self::Subcategory(id)),
            (kind, type_id) => Err(SponsorshipError::InvalidScope { kind, type_id }),
        }
    }

    /// Rebuild a tier from the columns stored on listing and waitlist rows.
    pub fn from_stored(
        sponsorship_type: &str,
        type_id: Option<i32>,
    ) -> Result<Self, SponsorshipError> {
        let kind = sponsorship_type
            .parse::<SponsorshipType>()
            .map_err(SponsorshipError::UnknownSponsorshipType)?;

        Self::new(kind, type_id)
    }

    pub fn kind(&self) -> SponsorshipType {
        match self {
            Self::Main => SponsorshipType::MainSponsor,
            Self::Category(_) => SponsorshipType::CategorySponsor,
            Self::Subcategory(_) => SponsorshipType::SubcategorySponsor,
        }
    }

    /// Category or subcategory id, `None` for main sponsorship.
    pub fn scope_id(&self) -> Option<i32> {
        match self {
            Self::Main => None,
            Self::Category(id) | Self::Subcategory(id) => Some(*id),
        }
    }

    /// Category column value for listings and invoices in this tier.
    pub fn category_id(&self) -> Option<i32> {
        match self {
            Self::Category(id) => Some(*id),
            _ => None,
        }
    }

    /// Subcategory column value for listings and invoices in this tier.
    pub fn subcategory_id(&self) -> Option<i32> {
        match self {
            Self::Subcategory(id) => Some(*id),
            _ => None,
        }
    }

    /// Reservation group key, e.g. `MainSponsor-0` or `CategorySponsor-12`.
    pub fn group_key(&self) -> String {
        format!("{}-{}", self.kind().as_str(), self.scope_id().unwrap_or(0))
    }
}
