use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ChurnError {
    #[error("Churn window end {end} must be after start {start}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },
    #[error("Churn series end month {end} must be after start month {start}")]
    InvalidSeries { start: NaiveDate, end: NaiveDate },
}

impl IntoResponse for ChurnError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
