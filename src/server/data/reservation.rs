use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::reservation::NewReservation;

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    /// Creates a new instance of [`ReservationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new reservation hold.
    pub async fn create(
        &self,
        reservation: NewReservation,
    ) -> Result<entity::sponsored_listing_reservation::Model, DbErr> {
        let reservation = entity::sponsored_listing_reservation::ActiveModel {
            reservation_id: ActiveValue::Set(reservation.reservation_id),
            reservation_group: ActiveValue::Set(reservation.reservation_group),
            detail: ActiveValue::Set(reservation.detail),
            expires_at: ActiveValue::Set(reservation.expires_at),
            created_at: ActiveValue::Set(reservation.created_at),
            ..Default::default()
        };

        reservation.insert(self.db).await
    }

    /// Looks up a reservation by token regardless of expiry.
    pub async fn find_by_token(
        &self,
        reservation_id: &str,
    ) -> Result<Option<entity::sponsored_listing_reservation::Model>, DbErr> {
        entity::prelude::SponsoredListingReservation::find()
            .filter(entity::sponsored_listing_reservation::Column::ReservationId.eq(reservation_id))
            .one(self.db)
            .await
    }

    /// Counts reservations in `reservation_group` that expire strictly after `now`.
    pub async fn count_active(
        &self,
        reservation_group: &str,
        now: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        use entity::sponsored_listing_reservation::Column;

        entity::prelude::SponsoredListingReservation::find()
            .filter(Column::ReservationGroup.eq(reservation_group))
            .filter(Column::ExpiresAt.gt(now))
            .count(self.db)
            .await
    }

    /// Deletes a reservation by token, returning the number of rows removed.
    pub async fn delete_by_token(&self, reservation_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::SponsoredListingReservation::delete_many()
            .filter(entity::sponsored_listing_reservation::Column::ReservationId.eq(reservation_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes reservations that expired before `cutoff`.
    pub async fn delete_expired_before(&self, cutoff: NaiveDateTime) -> Result<u64, DbErr> {
        let result = entity::prelude::SponsoredListingReservation::delete_many()
            .filter(entity::sponsored_listing_reservation::Column::ExpiresAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
