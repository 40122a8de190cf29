//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers shared across services and jobs: calendar month
//! arithmetic for churn reports and placeholder substitution for opening notifications.

pub mod template;
pub mod time;
