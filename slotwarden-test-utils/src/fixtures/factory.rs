//! Factory functions for building test timestamps and in-memory models.
//!
//! These are pure functions with no database interaction.

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::WaitlistEntryModel;

/// Build a calendar date, panicking on an invalid date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid test date")
}

/// Build a UTC timestamp at the given hour and minute.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("invalid test time")
}

/// Create a pending waitlist entry model without touching the database.
///
/// # Arguments
/// - `id` - Record id to assign
/// - `email` - Subscriber email
/// - `sponsorship_type` - Stored sponsorship type name
/// - `type_id` - Category or subcategory scope, `None` for main
/// - `subscribed_at` - Subscription timestamp
pub fn mock_waitlist_entry_model(
    id: i32,
    email: &str,
    sponsorship_type: &str,
    type_id: Option<i32>,
    subscribed_at: NaiveDateTime,
) -> WaitlistEntryModel {
    WaitlistEntryModel {
        id,
        email: email.to_string(),
        sponsorship_type: sponsorship_type.to_string(),
        type_id,
        directory_entry_id: None,
        subscribed_at,
        is_active: true,
        is_reminder_sent: false,
        reminder_sent_at: None,
        reminder_sent_link: None,
        created_at: subscribed_at,
        updated_at: subscribed_at,
    }
}
