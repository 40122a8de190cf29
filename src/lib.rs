//! Sponsored-listing capacity management.
//!
//! Allocates a fixed number of concurrent paid placements across three sponsorship tiers, holds
//! short-lived reservations during checkout, notifies waitlisted buyers when a slot frees up and
//! reports advertiser churn from historical paid campaigns.

pub mod model;
pub mod server;
