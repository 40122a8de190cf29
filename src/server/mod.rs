//! Server application core modules.
//!
//! This module contains all server-side functionality for slotwarden, including HTTP routing,
//! database operations, sponsorship capacity services, email delivery and job scheduling. It
//! provides the backend that decides whether a sponsorship slot can be sold, holds it during
//! checkout, promotes paid invoices into listings and notifies waitlisted buyers.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod mail;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
