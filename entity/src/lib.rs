//! SeaORM entity models for the sponsored-listing capacity store.

pub mod prelude;

pub mod directory_entry;
pub mod sponsored_listing;
pub mod sponsored_listing_invoice;
pub mod sponsored_listing_opening_notification;
pub mod sponsored_listing_reservation;
