mod directory_entry;
mod reservation;

use slotwarden_test_utils::prelude::*;

use crate::{model::sponsorship::SponsorshipType, server::model::tier::SponsorshipTier};
