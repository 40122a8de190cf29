//! Database model type aliases for test utilities.
//!
//! These aliases match the ones used by the main slotwarden crate so fixtures and
//! assertions read the same on both sides.

/// Type alias for directory entry database model.
pub type DirectoryEntryModel = entity::directory_entry::Model;

/// Type alias for paid invoice database model.
pub type InvoiceModel = entity::sponsored_listing_invoice::Model;

/// Type alias for active sponsored listing database model.
pub type ListingModel = entity::sponsored_listing::Model;

/// Type alias for reservation hold database model.
pub type ReservationModel = entity::sponsored_listing_reservation::Model;

/// Type alias for waitlist entry database model.
pub type WaitlistEntryModel = entity::sponsored_listing_opening_notification::Model;
