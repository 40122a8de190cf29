//! Tests for WaitlistRepository::pending_queue method.

use super::*;

/// Tests first-come-first-notified ordering with an id tie-break.
///
/// Expected: Ok with entries ordered by subscription time, then id
#[tokio::test]
async fn orders_by_subscription_then_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SponsoredListingOpeningNotification)
        .build()
        .await?;
    let category = SponsorshipType::CategorySponsor.as_str();
    let t1 = factory::at(2025, 1, 1, 9, 0);
    let t2 = factory::at(2025, 1, 2, 9, 0);

    let late = test
        .waitlist()
        .insert_pending_entry("late@example.com", category, Some(3), None, t2)
        .await?;
    let first = test
        .waitlist()
        .insert_pending_entry("first@example.com", category, Some(3), None, t1)
        .await?;
    let tie = test
        .waitlist()
        .insert_pending_entry("tie@example.com", category, Some(3), None, t1)
        .await?;
    test.waitlist()
        .insert_pending_entry("other@example.com", category, Some(4), None, t1)
        .await?;

    let repo = WaitlistRepository::new(&test.db);
    let queue = repo.pending_queue(SponsorshipTier::Category(3)).await?;

    let ids: Vec<i32> = queue.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![first.id, tie.id, late.id]);

    Ok(())
}

/// Tests that notified entries leave the queue.
///
/// Expected: Ok with the marked entry excluded
#[tokio::test]
async fn excludes_notified_entries() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SponsoredListingOpeningNotification)
        .build()
        .await?;
    let main = SponsorshipType::MainSponsor.as_str();
    let now = factory::at(2025, 1, 1, 9, 0);
    let notified = test
        .waitlist()
        .insert_pending_entry("a@example.com", main, None, None, now)
        .await?;
    let waiting = test
        .waitlist()
        .insert_pending_entry("b@example.com", main, None, None, now)
        .await?;

    let repo = WaitlistRepository::new(&test.db);
    repo.mark_reminder_sent(notified, "https://example.com/buy", now)
        .await?;
    let queue = repo.pending_queue(SponsorshipTier::Main).await?;

    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id, waiting.id);

    Ok(())
}
