//! Server application models and type definitions.
//!
//! This module contains domain models for the server application, including application state,
//! database model type aliases, sponsorship tiers and the derived read models produced by the
//! capacity, waitlist and churn services.

pub mod activation;
pub mod app;
pub mod capacity;
pub mod churn;
pub mod db;
pub mod reservation;
pub mod tier;
pub mod waitlist;
