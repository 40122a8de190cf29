use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Kind of sponsored placement being sold.
///
/// Stored in the database by its variant name (e.g. `CategorySponsor`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum SponsorshipType {
    /// Site-wide placement
    MainSponsor,
    /// Placement within a single category
    CategorySponsor,
    /// Placement within a single subcategory
    SubcategorySponsor,
}

impl SponsorshipType {
    /// Every sponsorship type, in the order the opening notifier processes them.
    pub const ALL: [SponsorshipType; 3] = [
        SponsorshipType::MainSponsor,
        SponsorshipType::CategorySponsor,
        SponsorshipType::SubcategorySponsor,
    ];

    /// Name persisted in the `sponsorship_type` columns.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MainSponsor => "MainSponsor",
            Self::CategorySponsor => "CategorySponsor",
            Self::SubcategorySponsor => "SubcategorySponsor",
        }
    }

    /// Human readable label used in notification emails.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MainSponsor => "Main Sponsor",
            Self::CategorySponsor => "Category Sponsor",
            Self::SubcategorySponsor => "Subcategory Sponsor",
        }
    }
}

impl fmt::Display for SponsorshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SponsorshipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MainSponsor" => Ok(Self::MainSponsor),
            "CategorySponsor" => Ok(Self::CategorySponsor),
            "SubcategorySponsor" => Ok(Self::SubcategorySponsor),
            other => Err(format!("unknown sponsorship type {other:?}")),
        }
    }
}

/// Tier and scope selector used by availability and reservation endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScopeQuery {
    /// Sponsorship type being queried
    pub sponsorship_type: SponsorshipType,
    /// Category or subcategory id; omitted for main sponsorship
    pub type_id: Option<i32>,
}

/// Current slot usage for one tier and scope
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityDto {
    pub sponsorship_type: SponsorshipType,
    pub type_id: Option<i32>,
    /// Maximum concurrent placements for this tier
    pub max_slots: u64,
    /// Listings whose campaign covers the current instant
    pub active_listings: u64,
    /// Unexpired reservation holds in the scope
    pub active_reservations: u64,
    /// Minimum sellable inventory required, absent for main sponsorship
    pub min_inventory: Option<u64>,
    /// Active, non-sponsored directory entries in the scope, absent for main sponsorship
    pub sellable_entries: Option<u64>,
    /// Whether a buyer may reserve a slot right now
    pub can_claim: bool,
}

/// Request body for creating a reservation hold
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReservationDto {
    pub sponsorship_type: SponsorshipType,
    pub type_id: Option<i32>,
    /// Optional free text stored with the hold (e.g. the buyer's directory entry)
    pub detail: Option<String>,
}

/// A reservation hold as returned to the checkout flow
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    /// Opaque reservation token
    pub reservation_id: String,
    pub reservation_group: String,
    pub detail: Option<String>,
    pub expires_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}
