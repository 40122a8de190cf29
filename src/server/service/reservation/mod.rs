//! Reservation holds taken during checkout.
//!
//! A hold is the only claim on capacity short of a paid listing. Holds are never updated or
//! explicitly cancelled; they stop counting the instant `expires_at` passes and are deleted
//! later by the cleanup job or when a payment consumes them.

#[cfg(test)]
mod tests;

use chrono::{Duration, NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::reservation::ReservationRepository,
    error::{sponsorship::SponsorshipError, Error},
    model::{db::ReservationModel, reservation::NewReservation, tier::SponsorshipTier},
    service::{
        capacity::{availability::SlotAvailabilityService, policy::CapacityPolicy},
        retry::RetryContext,
    },
};

pub struct ReservationLedger<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationLedger<'a> {
    /// Creates a new instance of [`ReservationLedger`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Takes a hold in `reservation_group` lasting `ttl` from now.
    pub async fn create(
        &self,
        reservation_group: &str,
        ttl: Duration,
        detail: Option<String>,
    ) -> Result<ReservationModel, Error> {
        self.create_at(reservation_group, ttl, detail, Utc::now().naive_utc())
            .await
    }

    /// Takes a hold in `reservation_group` lasting `ttl` from `now`.
    ///
    /// Any number of holds may exist in one group; capacity is the caller's concern.
    ///
    /// # Returns
    /// - `Ok(ReservationModel)` - Persisted hold carrying its unique token
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn create_at(
        &self,
        reservation_group: &str,
        ttl: Duration,
        detail: Option<String>,
        now: NaiveDateTime,
    ) -> Result<ReservationModel, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();
        let reservation = NewReservation::new(reservation_group, ttl, detail, now);

        ctx.execute_with_retry(
            &format!("create reservation in {}", reservation_group),
            |_| {
                let db = db.clone();
                let reservation = reservation.clone();

                Box::pin(async move {
                    let reservation_repo = ReservationRepository::new(&db);

                    Ok(reservation_repo.create(reservation).await?)
                })
            },
        )
        .await
    }

    /// Looks up an unexpired hold by token as of now.
    pub async fn get_by_token(&self, reservation_id: &str) -> Result<ReservationModel, Error> {
        self.get_by_token_at(reservation_id, Utc::now().naive_utc())
            .await
    }

    /// Looks up an unexpired hold by token.
    ///
    /// # Returns
    /// - `Ok(ReservationModel)` - Hold exists and expires after `now`
    /// - `Err(SponsorshipError::ReservationNotFound)` - Token unknown or hold expired
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_by_token_at(
        &self,
        reservation_id: &str,
        now: NaiveDateTime,
    ) -> Result<ReservationModel, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();
        let token = reservation_id.to_string();

        let reservation = ctx
            .execute_with_retry(&format!("get reservation {}", reservation_id), |_| {
                let db = db.clone();
                let token = token.clone();

                Box::pin(async move {
                    let reservation_repo = ReservationRepository::new(&db);

                    Ok(reservation_repo.find_by_token(&token).await?)
                })
            })
            .await?;

        match reservation {
            Some(reservation) if reservation.expires_at > now => Ok(reservation),
            _ => Err(SponsorshipError::ReservationNotFound(reservation_id.to_string()).into()),
        }
    }

    /// Counts unexpired holds in `reservation_group` as of now.
    pub async fn count_active(&self, reservation_group: &str) -> Result<u64, Error> {
        self.count_active_at(reservation_group, Utc::now().naive_utc())
            .await
    }

    /// Counts holds in `reservation_group` that are still live at `now`.
    pub async fn count_active_at(
        &self,
        reservation_group: &str,
        now: NaiveDateTime,
    ) -> Result<u64, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();
        let group = reservation_group.to_string();

        ctx.execute_with_retry(
            &format!("count reservations in {}", reservation_group),
            |_| {
                let db = db.clone();
                let group = group.clone();

                Box::pin(async move {
                    let reservation_repo = ReservationRepository::new(&db);

                    Ok(reservation_repo.count_active(&group, now).await?)
                })
            },
        )
        .await
    }

    /// Checks availability for `tier` and takes a hold if a slot is open.
    ///
    /// The check and the insert are separate store operations. Concurrent buyers can both pass
    /// the check and over-commit the pool with holds; the surplus expires with the TTL and
    /// listing activation refuses to exceed capacity.
    ///
    /// # Returns
    /// - `Ok(ReservationModel)` - Hold taken
    /// - `Err(SponsorshipError::CapacityExhausted)` - No slot available, offer the waitlist
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn reserve_at(
        &self,
        policy: &CapacityPolicy,
        tier: SponsorshipTier,
        ttl: Duration,
        detail: Option<String>,
        now: NaiveDateTime,
    ) -> Result<ReservationModel, Error> {
        let availability = SlotAvailabilityService::new(self.db, policy);

        if !availability.can_claim_at(tier, now).await? {
            return Err(SponsorshipError::CapacityExhausted(
                tier.kind(),
                tier.group_key(),
            )
            .into());
        }

        let reservation = self
            .create_at(&tier.group_key(), ttl, detail, now)
            .await?;

        tracing::info!(
            "Reserved {} slot with hold {} until {}",
            tier.group_key(),
            reservation.reservation_id,
            reservation.expires_at
        );

        Ok(reservation)
    }

    /// Takes a hold in `tier` if a slot is open now. See [`Self::reserve_at`].
    pub async fn reserve(
        &self,
        policy: &CapacityPolicy,
        tier: SponsorshipTier,
        ttl: Duration,
        detail: Option<String>,
    ) -> Result<ReservationModel, Error> {
        self.reserve_at(policy, tier, ttl, detail, Utc::now().naive_utc())
            .await
    }

    /// Deletes holds that expired more than `retention` before `now`.
    ///
    /// Returns the number of deleted holds.
    pub async fn purge_expired_at(
        &self,
        retention: Duration,
        now: NaiveDateTime,
    ) -> Result<u64, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();
        let cutoff = now - retention;

        ctx.execute_with_retry("purge expired reservations", |_| {
            let db = db.clone();

            Box::pin(async move {
                let reservation_repo = ReservationRepository::new(&db);

                Ok(reservation_repo.delete_expired_before(cutoff).await?)
            })
        })
        .await
    }
}
