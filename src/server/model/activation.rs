use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::server::model::tier::SponsorshipTier;

/// A settled payment to be promoted into an active listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationRequest {
    /// External invoice token, unique across invoices
    pub invoice_id: String,
    pub directory_entry_id: i32,
    pub tier: SponsorshipTier,
    /// First paid day, inclusive
    pub campaign_start: NaiveDate,
    /// Last paid day, inclusive
    pub campaign_end: NaiveDate,
    /// Reservation hold consumed by this payment, if checkout took one
    pub reservation_id: Option<String>,
}

impl ActivationRequest {
    /// Listing campaign window spanning the whole of both boundary days.
    ///
    /// The end is the last microsecond of the final day, the finest precision the store keeps.
    pub fn campaign_window(&self) -> (NaiveDateTime, NaiveDateTime) {
        let end_of_day =
            NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).unwrap_or(NaiveTime::MIN);

        (
            self.campaign_start.and_time(NaiveTime::MIN),
            self.campaign_end.and_time(end_of_day),
        )
    }
}
