//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Each repository owns one table and borrows a `ConnectionTrait` implementor, so the same
//! repository runs against the connection pool or inside a transaction.

pub mod directory_entry;
pub mod invoice;
pub mod listing;
pub mod reservation;
pub mod waitlist;

#[cfg(test)]
mod tests;
