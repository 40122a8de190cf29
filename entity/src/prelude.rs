pub use super::directory_entry::Entity as DirectoryEntry;
pub use super::sponsored_listing::Entity as SponsoredListing;
pub use super::sponsored_listing_invoice::Entity as SponsoredListingInvoice;
pub use super::sponsored_listing_opening_notification::Entity as SponsoredListingOpeningNotification;
pub use super::sponsored_listing_reservation::Entity as SponsoredListingReservation;
