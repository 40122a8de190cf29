//! Test fixture modules for database record creation.
//!
//! Each submodule provides fixtures for one area of the system:
//!
//! - `directory` - directory entries that make up sellable inventory
//! - `sponsorship` - paid invoices, active listings and reservation holds
//! - `waitlist` - opening notification subscriptions
//! - `factory` - pure helpers for building dates and timestamps

pub mod directory;
pub mod factory;
pub mod sponsorship;
pub mod waitlist;
