//! Tests for SlotAvailabilityService::can_claim_at method.
//!
//! These tests verify the joint capacity and inventory rule, including the way expired holds
//! stop counting without any cleanup having run.

use super::*;

/// Tests that listings and holds together exhaust main capacity until the hold lapses.
///
/// With three main slots, two running listings and one unexpired hold, nothing can be claimed.
/// Once the clock moves past the hold's expiry the slot frees up again.
///
/// Expected: false before expiry, true after
#[tokio::test]
async fn expired_hold_frees_main_slot() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sponsorship_tables()
        .with_active_entries(2, 1, 1)
        .build()
        .await?;
    let now = factory::at(2025, 6, 1, 12, 0);
    let main = SponsorshipType::MainSponsor.as_str();
    test.sponsorship()
        .insert_active_listing(1, main, None, None, now)
        .await?;
    test.sponsorship()
        .insert_active_listing(2, main, None, None, now)
        .await?;
    test.sponsorship()
        .insert_reservation(
            &SponsorshipTier::Main.group_key(),
            now + Duration::minutes(15),
        )
        .await?;

    let policy = CapacityPolicy::new(CapacityConfig {
        max_main_slots: 3,
        ..CapacityConfig::default()
    });
    let service = SlotAvailabilityService::new(&test.db, &policy);

    assert!(!service.can_claim_at(SponsorshipTier::Main, now).await.unwrap());
    assert!(
        service
            .can_claim_at(SponsorshipTier::Main, now + Duration::minutes(16))
            .await
            .unwrap()
    );

    Ok(())
}

/// Tests that over-committed holds resolve once they expire.
///
/// Two buyers both passed the advisory check and each took a hold on a single-slot
/// subcategory. The pool reads as over-committed until the holds lapse, then becomes free.
///
/// Expected: over-commit visible before expiry, pool free afterwards
#[tokio::test]
async fn over_committed_holds_expire() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sponsorship_tables()
        .with_active_entries(12, 1, 4)
        .build()
        .await?;
    let now = factory::at(2025, 6, 1, 12, 0);
    let tier = SponsorshipTier::Subcategory(4);
    for _ in 0..2 {
        test.sponsorship()
            .insert_reservation(&tier.group_key(), now + Duration::minutes(15))
            .await?;
    }

    let policy = CapacityPolicy::default();
    let service = SlotAvailabilityService::new(&test.db, &policy);

    let before = service.snapshot_at(tier, now).await.unwrap();
    assert_eq!(before.active_reservations, 2);
    assert!(before.active_listings + before.active_reservations > before.max_slots);
    assert!(!before.can_claim());

    let later = now + Duration::minutes(15);
    let after = service.snapshot_at(tier, later).await.unwrap();
    assert_eq!(after.active_reservations, 0);
    assert!(after.active_listings + after.active_reservations <= after.max_slots);
    assert!(service.can_claim_at(tier, later).await.unwrap());

    Ok(())
}

/// Tests the minimum inventory gate for category sponsorship.
///
/// Ten active entries meet a gate of ten. Sponsoring one of them in the same tier removes it
/// from sellable inventory, closing the category even though a slot remains.
///
/// Expected: true with ten sellable entries, false with nine
#[tokio::test]
async fn category_requires_minimum_inventory() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sponsorship_tables()
        .with_active_entries(10, 3, 30)
        .build()
        .await?;
    let now = factory::at(2025, 6, 1, 12, 0);
    let tier = SponsorshipTier::Category(3);
    let policy = CapacityPolicy::new(CapacityConfig {
        max_category_slots: 2,
        min_category_inventory: 10,
        ..CapacityConfig::default()
    });
    let service = SlotAvailabilityService::new(&test.db, &policy);

    assert!(service.can_claim_at(tier, now).await.unwrap());

    test.sponsorship()
        .insert_active_listing(
            1,
            SponsorshipType::CategorySponsor.as_str(),
            Some(3),
            None,
            now,
        )
        .await?;

    assert!(!service.can_claim_at(tier, now).await.unwrap());

    Ok(())
}

/// Tests that holds in one scope do not consume capacity in another.
///
/// Expected: category 2 remains claimable while category 1 is held
#[tokio::test]
async fn holds_are_scoped_to_their_group() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sponsorship_tables()
        .with_active_entries(10, 1, 1)
        .with_active_entries(10, 2, 2)
        .build()
        .await?;
    let now = factory::at(2025, 6, 1, 12, 0);
    test.sponsorship()
        .insert_reservation(
            &SponsorshipTier::Category(1).group_key(),
            now + Duration::minutes(10),
        )
        .await?;

    let policy = CapacityPolicy::default();
    let service = SlotAvailabilityService::new(&test.db, &policy);

    assert!(
        !service
            .can_claim_at(SponsorshipTier::Category(1), now)
            .await
            .unwrap()
    );
    assert!(
        service
            .can_claim_at(SponsorshipTier::Category(2), now)
            .await
            .unwrap()
    );

    Ok(())
}
