//! Tests for ReservationRepository::delete_expired_before method.

use chrono::Duration;

use super::*;

/// Tests that only holds expired before the cutoff are deleted.
///
/// Expected: Ok with 1 row deleted and the recent hold kept
#[tokio::test]
async fn deletes_only_long_expired_holds() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SponsoredListingReservation)
        .build()
        .await?;
    let now = factory::at(2025, 3, 10, 12, 0);
    let group = SponsorshipTier::Main.group_key();
    let old = test
        .sponsorship()
        .insert_reservation(&group, now - Duration::days(3))
        .await?;
    let recent = test
        .sponsorship()
        .insert_reservation(&group, now - Duration::hours(2))
        .await?;

    let repo = ReservationRepository::new(&test.db);
    let deleted = repo.delete_expired_before(now - Duration::days(1)).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_token(&old.reservation_id).await?.is_none());
    assert!(repo.find_by_token(&recent.reservation_id).await?.is_some());

    Ok(())
}
