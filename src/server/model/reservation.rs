use chrono::{Duration, NaiveDateTime};

use crate::{model::sponsorship::ReservationDto, server::model::db::ReservationModel};

/// A reservation hold ready to be persisted.
///
/// The constructor stamps `created_at` and derives `expires_at`; rows are never updated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub reservation_id: String,
    pub reservation_group: String,
    pub detail: Option<String>,
    pub expires_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl NewReservation {
    pub fn new(
        reservation_group: impl Into<String>,
        ttl: Duration,
        detail: Option<String>,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            reservation_id: uuid::Uuid::new_v4().to_string(),
            reservation_group: reservation_group.into(),
            detail,
            expires_at: now + ttl,
            created_at: now,
        }
    }
}

impl From<ReservationModel> for ReservationDto {
    fn from(model: ReservationModel) -> Self {
        Self {
            reservation_id: model.reservation_id,
            reservation_group: model.reservation_group,
            detail: model.detail,
            expires_at: model.expires_at,
            created_at: model.created_at,
        }
    }
}
