//! HTTP controller endpoints for the slotwarden web API.
//!
//! This module contains Axum handlers for slot availability, checkout reservations, the opening
//! waitlist and churn reports. Controllers validate inputs, call the services and return HTTP
//! responses; every handler carries utoipa annotations for the OpenAPI document.

pub mod report;
pub mod sponsorship;
pub mod waitlist;
