//! Tests for SlotAvailabilityService::snapshot_at method.

use crate::server::error::Error;

use super::*;

/// Expect main snapshots to skip the inventory count entirely
#[tokio::test]
async fn main_snapshot_has_no_inventory() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;
    let now = factory::at(2025, 6, 1, 12, 0);

    let policy = CapacityPolicy::default();
    let service = SlotAvailabilityService::new(&test.db, &policy);
    let snapshot = service.snapshot_at(SponsorshipTier::Main, now).await.unwrap();

    assert_eq!(snapshot.max_slots, 3);
    assert_eq!(snapshot.active_listings, 0);
    assert_eq!(snapshot.min_inventory, None);
    assert_eq!(snapshot.sellable_entries, None);
    assert!(snapshot.can_claim());

    Ok(())
}

/// Expect a database error when the sponsorship tables are missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let now = factory::at(2025, 6, 1, 12, 0);

    let policy = CapacityPolicy::default();
    let service = SlotAvailabilityService::new(&test.db, &policy);
    let result = service.snapshot_at(SponsorshipTier::Main, now).await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
