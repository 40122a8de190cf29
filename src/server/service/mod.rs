//! Service layer for business logic.
//!
//! This module contains the service layer that implements sponsorship capacity rules on top of
//! the repositories: slot availability, reservation holds, listing activation, the waitlist,
//! opening notifications and churn analytics. Store reads and writes run through
//! [`retry::RetryContext`] so transient connection failures are retried.

pub mod activation;
pub mod capacity;
pub mod churn;
pub mod notifier;
pub mod reservation;
pub mod retry;
pub mod waitlist;
