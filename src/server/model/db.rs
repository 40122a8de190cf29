//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so services and controllers do not need to reach into the
//! generated `entity` crate directly.

/// Type alias for directory entry database model.
///
/// A minimal projection of the external directory: the advertiser identity, its category and
/// subcategory placement and its moderation status.
pub type DirectoryEntryModel = entity::directory_entry::Model;

/// Type alias for paid invoice database model.
///
/// Each paid invoice is one campaign span for an advertiser. Churn analytics reads these rows.
pub type InvoiceModel = entity::sponsored_listing_invoice::Model;

/// Type alias for active sponsored listing database model.
pub type ListingModel = entity::sponsored_listing::Model;

/// Type alias for reservation hold database model.
///
/// # Fields (from `entity::sponsored_listing_reservation::Model`)
/// - `reservation_id` - Globally unique opaque token
/// - `reservation_group` - Capacity pool key derived from tier and scope
/// - `detail` - Optional free text supplied by the buyer
/// - `expires_at` - Instant after which the hold no longer counts
/// - `created_at` - Instant the hold was taken
pub type ReservationModel = entity::sponsored_listing_reservation::Model;

/// Type alias for waitlist entry database model.
///
/// # Fields (from `entity::sponsored_listing_opening_notification::Model`)
/// - `email` - Normalized subscriber email
/// - `sponsorship_type` / `type_id` - Tier and scope, `type_id` is null for main
/// - `directory_entry_id` - Optional advertiser the subscriber wants to promote
/// - `subscribed_at` - Queue position within the scope
/// - `is_active` / `is_reminder_sent` - Subscription cycle state
/// - `reminder_sent_at` / `reminder_sent_link` - Record of the delivered notification
pub type WaitlistEntryModel = entity::sponsored_listing_opening_notification::Model;
