//! Opening notification subscription insertion utilities.

use chrono::NaiveDateTime;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::WaitlistEntryModel, TestContext};

impl TestContext {
    pub fn waitlist<'a>(&'a self) -> WaitlistFixtures<'a> {
        WaitlistFixtures { setup: self }
    }
}

pub struct WaitlistFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> WaitlistFixtures<'a> {
    /// Insert an active, unreminded waitlist entry.
    ///
    /// # Arguments
    /// - `email` - Subscriber email, stored as given
    /// - `sponsorship_type` - Stored sponsorship type name
    /// - `type_id` - Category or subcategory scope, `None` for main
    /// - `directory_entry_id` - Optional advertiser the subscriber wants to promote
    /// - `subscribed_at` - Subscription timestamp used for queue order
    pub async fn insert_pending_entry(
        &self,
        email: &str,
        sponsorship_type: &str,
        type_id: Option<i32>,
        directory_entry_id: Option<i32>,
        subscribed_at: NaiveDateTime,
    ) -> Result<WaitlistEntryModel, TestError> {
        Ok(entity::prelude::SponsoredListingOpeningNotification::insert(
            entity::sponsored_listing_opening_notification::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                sponsorship_type: ActiveValue::Set(sponsorship_type.to_string()),
                type_id: ActiveValue::Set(type_id),
                directory_entry_id: ActiveValue::Set(directory_entry_id),
                subscribed_at: ActiveValue::Set(subscribed_at),
                is_active: ActiveValue::Set(true),
                is_reminder_sent: ActiveValue::Set(false),
                reminder_sent_at: ActiveValue::Set(None),
                reminder_sent_link: ActiveValue::Set(None),
                created_at: ActiveValue::Set(subscribed_at),
                updated_at: ActiveValue::Set(subscribed_at),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
