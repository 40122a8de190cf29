
use chrono::{Duration, NaiveDate};
use slotwarden_test_utils::prelude::*;

use crate::{
    model::sponsorship::SponsorshipType,
    server::{
        error::{sponsorship::SponsorshipError, Error},
        model::{activation::ActivationRequest, tier::SponsorshipTier},
        service::{
            activation::ListingActivationService, capacity::policy::CapacityPolicy,
            reservation::ReservationLedger,
        },
    },
};

fn request(
    invoice_id: &str,
    directory_entry_id: i32,
    tier: SponsorshipTier,
    reservation_id: Option<String>,
) -> ActivationRequest {
    ActivationRequest {
        invoice_id: invoice_id.to_string(),
        directory_entry_id,
        tier,
        campaign_start: factory::date(2025, 6, 1),
        campaign_end: factory::date(2025, 6, 30),
        reservation_id,
    }
}

/// Request without a hold for the inclusive campaign days `start..=end`.
fn campaign(
    invoice_id: &str,
    directory_entry_id: i32,
    tier: SponsorshipTier,
    start: NaiveDate,
    end: NaiveDate,
) -> ActivationRequest {
    ActivationRequest {
        campaign_start: start,
        campaign_end: end,
        ..request(invoice_id, directory_entry_id, tier, None)
    }
}
