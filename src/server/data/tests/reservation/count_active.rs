//! Tests for ReservationRepository::count_active method.

use chrono::Duration;

use super::*;

/// Tests that only unexpired holds in the group are counted.
///
/// Expected: Ok with expired holds and other groups excluded
#[tokio::test]
async fn counts_unexpired_holds_in_group() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SponsoredListingReservation)
        .build()
        .await?;
    let now = factory::at(2025, 3, 1, 12, 0);
    let group = SponsorshipTier::Main.group_key();

    test.sponsorship()
        .insert_reservation(&group, now + Duration::minutes(5))
        .await?;
    test.sponsorship()
        .insert_reservation(&group, now - Duration::minutes(5))
        .await?;
    test.sponsorship()
        .insert_reservation("CategorySponsor-1", now + Duration::minutes(5))
        .await?;

    let repo = ReservationRepository::new(&test.db);
    let count = repo.count_active(&group, now).await?;

    assert_eq!(count, 1);

    Ok(())
}

/// Tests that a hold expiring exactly at `now` no longer counts.
///
/// Expected: Ok with 0
#[tokio::test]
async fn hold_expiring_now_is_not_active() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SponsoredListingReservation)
        .build()
        .await?;
    let now = factory::at(2025, 3, 1, 12, 0);
    let group = SponsorshipTier::Main.group_key();
    test.sponsorship().insert_reservation(&group, now).await?;

    let repo = ReservationRepository::new(&test.db);

    assert_eq!(repo.count_active(&group, now).await?, 0);

    Ok(())
}
