
use chrono::Duration;
use slotwarden_test_utils::prelude::*;

use crate::server::{
    error::{sponsorship::SponsorshipError, Error},
    model::tier::SponsorshipTier,
    service::reservation::ReservationLedger,
};
