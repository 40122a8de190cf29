use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Invalid email address {address:?}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },
    #[error("Failed to build email message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error("Mail delivery task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for MailError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
