//! Tests for WaitlistRepository::list_waiting and count_waiting methods.

use chrono::Duration;

use super::*;

/// Tests newest-first paging over waiting subscribers.
///
/// Expected: Ok with the second page holding the two oldest entries
#[tokio::test]
async fn pages_newest_first() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SponsoredListingOpeningNotification)
        .build()
        .await?;
    let main = SponsorshipType::MainSponsor.as_str();
    let start = factory::at(2025, 1, 1, 9, 0);
    let mut ids = Vec::new();
    for i in 0..5 {
        let entry = test
            .waitlist()
            .insert_pending_entry(
                &format!("user{}@example.com", i),
                main,
                None,
                None,
                start + Duration::hours(i),
            )
            .await?;
        ids.push(entry.id);
    }

    let repo = WaitlistRepository::new(&test.db);
    let second_page = repo.list_waiting(SponsorshipTier::Main, 3, 3).await?;

    let page_ids: Vec<i32> = second_page.iter().map(|e| e.id).collect();
    assert_eq!(page_ids, vec![ids[1], ids[0]]);
    assert_eq!(repo.count_waiting(SponsorshipTier::Main).await?, 5);

    Ok(())
}
