//! Error types for the slotwarden server application.
//!
//! This module provides the error handling system with specialized error types for each domain
//! (configuration, sponsorship capacity, churn analytics, email delivery). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for their definitions.

pub mod churn;
pub mod config;
pub mod mail;
pub mod retry;
pub mod sponsorship;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        churn::ChurnError, config::ConfigError, mail::MailError, sponsorship::SponsorshipError,
    },
};

/// Main error type for the slotwarden server application.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// unified error type. `#[from]` enables automatic conversion via the `?` operator, and the
/// `IntoResponse` implementation maps errors to HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Sponsorship errors (scope validation, unknown tokens, capacity and activation conflicts)
/// - Churn errors (invalid report windows)
/// - Mail errors (address parsing, message building, SMTP transport)
/// - External library errors (database, scheduler, socket I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Sponsorship capacity, reservation or waitlist error.
    #[error(transparent)]
    SponsorshipError(#[from] SponsorshipError),
    /// Churn analytics request error.
    #[error(transparent)]
    ChurnError(#[from] ChurnError),
    /// Email delivery error.
    #[error(transparent)]
    MailError(#[from] MailError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// Socket error (binding or serving the HTTP listener).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid scopes, emails and churn windows
/// - 404 Not Found - Unknown or expired reservation tokens, unknown waitlist entries
/// - 409 Conflict - Exhausted capacity and activation conflicts
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::SponsorshipError(err) => err.into_response(),
            Self::ChurnError(err) => err.into_response(),
            Self::MailError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Build a JSON error response with the given status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}
