use chrono::{NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        directory_entry::DirectoryEntryRepository, listing::SponsoredListingRepository,
        reservation::ReservationRepository,
    },
    error::Error,
    model::{capacity::SlotAvailability, tier::SponsorshipTier},
    service::{capacity::policy::CapacityPolicy, retry::RetryContext},
};

/// Service answering whether a buyer may claim a slot in a tier right now.
///
/// The answer is advisory. Listings, holds and inventory are read without a lock held across
/// the reads, so two callers may both see an open slot; listing activation re-checks capacity
/// inside its own transaction.
pub struct SlotAvailabilityService<'a> {
    db: &'a DatabaseConnection,
    policy: &'a CapacityPolicy,
}

impl<'a> SlotAvailabilityService<'a> {
    /// Creates a new instance of [`SlotAvailabilityService`]
    pub fn new(db: &'a DatabaseConnection, policy: &'a CapacityPolicy) -> Self {
        Self { db, policy }
    }

    /// Whether a slot in `tier` can be claimed now.
    pub async fn can_claim(&self, tier: SponsorshipTier) -> Result<bool, Error> {
        self.can_claim_at(tier, Utc::now().naive_utc()).await
    }

    /// Whether a slot in `tier` can be claimed at `now`.
    pub async fn can_claim_at(
        &self,
        tier: SponsorshipTier,
        now: NaiveDateTime,
    ) -> Result<bool, Error> {
        let availability = self.snapshot_at(tier, now).await?;
        let can_claim = availability.can_claim();

        tracing::debug!(
            "{} capacity check: {} listings + {} holds of {} slots, inventory {:?}/{:?} => {}",
            tier.group_key(),
            availability.active_listings,
            availability.active_reservations,
            availability.max_slots,
            availability.sellable_entries,
            availability.min_inventory,
            can_claim
        );

        Ok(can_claim)
    }

    /// Reads listing, hold and inventory counts for `tier` at `now`.
    ///
    /// Sellable inventory is only counted for tiers with an inventory gate.
    ///
    /// # Returns
    /// - `Ok(SlotAvailability)` - Counts and limits for the tier's pool
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn snapshot_at(
        &self,
        tier: SponsorshipTier,
        now: NaiveDateTime,
    ) -> Result<SlotAvailability, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();
        let policy = *self.policy;

        ctx.execute_with_retry(&format!("availability of {}", tier.group_key()), |_| {
            let db = db.clone();

            Box::pin(async move {
                let listing_repo = SponsoredListingRepository::new(&db);
                let reservation_repo = ReservationRepository::new(&db);
                let entry_repo = DirectoryEntryRepository::new(&db);

                let active_listings = listing_repo.count_active(tier, now).await?;
                let active_reservations = reservation_repo
                    .count_active(&tier.group_key(), now)
                    .await?;

                let min_inventory = policy.min_inventory(tier.kind());
                let sellable_entries = match min_inventory {
                    Some(_) => Some(entry_repo.count_sellable(tier, now).await?),
                    None => None,
                };

                Ok(SlotAvailability {
                    tier,
                    max_slots: policy.max_slots(tier.kind()),
                    active_listings,
                    active_reservations,
                    min_inventory,
                    sellable_entries,
                })
            })
        })
        .await
    }

    /// Slot usage for `tier` at the current instant.
    pub async fn snapshot(&self, tier: SponsorshipTier) -> Result<SlotAvailability, Error> {
        self.snapshot_at(tier, Utc::now().naive_utc()).await
    }
}
