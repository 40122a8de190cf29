use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    model::sponsorship::SponsorshipType,
    server::error::{error_response, InternalServerError},
};

#[derive(Error, Debug)]
pub enum SponsorshipError {
    #[error("{kind} requires a positive scope id, got {type_id:?}")]
    InvalidScope {
        kind: SponsorshipType,
        type_id: Option<i32>,
    },
    #[error("Stored sponsorship type is not recognised: {0}")]
    UnknownSponsorshipType(String),
    #[error("Subscriber email must not be empty")]
    InvalidEmail,
    #[error("Reservation {0:?} does not exist or has expired")]
    ReservationNotFound(String),
    #[error("Waitlist entry {0} does not exist")]
    WaitlistEntryNotFound(i32),
    #[error("No {0} slot is available in scope {1}")]
    CapacityExhausted(SponsorshipType, String),
    #[error("Listing activation conflicted with an existing invoice, reservation or listing: {0}")]
    ActivationConflict(String),
}

impl IntoResponse for SponsorshipError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidScope { .. } | Self::InvalidEmail => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::ReservationNotFound(_) | Self::WaitlistEntryNotFound(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
            Self::CapacityExhausted(..) | Self::ActivationConflict(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::CONFLICT, self.to_string())
            }
            Self::UnknownSponsorshipType(_) => InternalServerError(self).into_response(),
        }
    }
}
