
use chrono::Duration;
use slotwarden_test_utils::prelude::*;

use crate::server::{
    error::{sponsorship::SponsorshipError, Error},
    model::tier::SponsorshipTier,
    service::waitlist::WaitlistQueue,
};

async fn waitlist_context() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_table(entity::prelude::SponsoredListingOpeningNotification)
        .build()
        .await
}
