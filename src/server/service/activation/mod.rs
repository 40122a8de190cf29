//! Promotion of settled payments into active listings.
//!
//! Activation is the hard arbiter of capacity. Reservation holds and the availability check are
//! advisory, but activation writes the invoice and listing in one transaction, checks the peak
//! number of listings overlapping the new campaign inside it and relies on unique keys (invoice
//! token, consumed reservation token, invoice reference on the listing) so a payment can never
//! be promoted twice.

#[cfg(test)]
mod tests;

use chrono::{NaiveDateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{
        invoice::InvoiceRepository, listing::SponsoredListingRepository,
        reservation::ReservationRepository,
    },
    error::{sponsorship::SponsorshipError, Error},
    model::{activation::ActivationRequest, db::ListingModel},
    service::{capacity::policy::CapacityPolicy, retry::RetryContext},
};

/// Maps unique-key violations to [`SponsorshipError::ActivationConflict`].
fn conflict_or_db_err(err: DbErr, invoice_id: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            SponsorshipError::ActivationConflict(format!("invoice {}: {}", invoice_id, detail))
                .into()
        }
        _ => err.into(),
    }
}

/// Highest number of `listings` running at the same instant within `[from, to]`.
///
/// Concurrency only rises when a campaign starts, so it is enough to sample `from` and every
/// campaign start inside the range.
fn peak_concurrency(listings: &[ListingModel], from: NaiveDateTime, to: NaiveDateTime) -> u64 {
    std::iter::once(from)
        .chain(
            listings
                .iter()
                .map(|l| l.campaign_start)
                .filter(|start| *start > from && *start <= to),
        )
        .map(|instant| {
            listings
                .iter()
                .filter(|l| l.campaign_start <= instant && instant <= l.campaign_end)
                .count() as u64
        })
        .max()
        .unwrap_or(0)
}

pub struct ListingActivationService<'a> {
    db: &'a DatabaseConnection,
    policy: &'a CapacityPolicy,
}

impl<'a> ListingActivationService<'a> {
    /// Creates a new instance of [`ListingActivationService`]
    pub fn new(db: &'a DatabaseConnection, policy: &'a CapacityPolicy) -> Self {
        Self { db, policy }
    }

    /// Promotes a settled payment into a listing as of now.
    pub async fn activate(&self, request: ActivationRequest) -> Result<ListingModel, Error> {
        self.activate_at(request, Utc::now().naive_utc()).await
    }

    /// Records the paid invoice and promotes it into an active listing.
    ///
    /// Capacity is re-checked against listings running when the new campaign begins (or at
    /// `now` if it has already begun). Holds do not count here; the hold consumed by this
    /// payment is deleted in the same transaction. Nothing is committed on failure.
    ///
    /// # Returns
    /// - `Ok(ListingModel)` - Listing created
    /// - `Err(SponsorshipError::CapacityExhausted)` - Tier already has its maximum listings
    /// - `Err(SponsorshipError::ActivationConflict)` - Invoice or reservation token already used
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn activate_at(
        &self,
        request: ActivationRequest,
        now: NaiveDateTime,
    ) -> Result<ListingModel, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();
        let max_slots = self.policy.max_slots(request.tier.kind());

        let listing = ctx
            .execute_with_retry(&format!("activate invoice {}", request.invoice_id), |_| {
                let db = db.clone();
                let request = request.clone();

                Box::pin(async move {
                    let txn = db.begin().await?;

                    let invoice = InvoiceRepository::new(&txn)
                        .create_paid(&request, now)
                        .await
                        .map_err(|e| conflict_or_db_err(e, &request.invoice_id))?;

                    let listing_repo = SponsoredListingRepository::new(&txn);
                    let (campaign_start, campaign_end) = request.campaign_window();
                    let from = campaign_start.max(now);
                    let overlapping = listing_repo
                        .list_overlapping(request.tier, from, campaign_end)
                        .await?;
                    if peak_concurrency(&overlapping, from, campaign_end) >= max_slots {
                        return Err(SponsorshipError::CapacityExhausted(
                            request.tier.kind(),
                            request.tier.group_key(),
                        )
                        .into());
                    }

                    let listing = listing_repo
                        .create(invoice.id, &request, now)
                        .await
                        .map_err(|e| conflict_or_db_err(e, &request.invoice_id))?;

                    if let Some(reservation_id) = &request.reservation_id {
                        ReservationRepository::new(&txn)
                            .delete_by_token(reservation_id)
                            .await?;
                    }

                    txn.commit().await?;

                    Ok(listing)
                })
            })
            .await?;

        tracing::info!(
            "Activated {} listing {} for directory entry {} from invoice {}",
            request.tier.group_key(),
            listing.id,
            listing.directory_entry_id,
            request.invoice_id
        );

        Ok(listing)
    }
}
