//! Request and response data transfer objects shared by the HTTP API.

pub mod api;
pub mod churn;
pub mod sponsorship;
pub mod waitlist;
