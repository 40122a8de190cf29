pub use sea_orm_migration::prelude::*;

mod m20251020_000001_directory_entry;
mod m20251020_000002_sponsored_listing_invoice;
mod m20251020_000003_sponsored_listing;
mod m20251020_000004_sponsored_listing_reservation;
mod m20251020_000005_sponsored_listing_opening_notification;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_directory_entry::Migration),
            Box::new(m20251020_000002_sponsored_listing_invoice::Migration),
            Box::new(m20251020_000003_sponsored_listing::Migration),
            Box::new(m20251020_000004_sponsored_listing_reservation::Migration),
            Box::new(m20251020_000005_sponsored_listing_opening_notification::Migration),
        ]
    }
}
