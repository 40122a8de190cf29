//! Tests for SponsoredListingRepository::list_overlapping method.

use super::*;

/// Tests selecting listings that touch any part of a date range.
///
/// Expected: listings starting inside or running across the range, nothing that ended before
/// it or starts after it
#[tokio::test]
async fn selects_listings_touching_range() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sponsorship_tables()
        .with_active_entries(4, 3, 1)
        .build()
        .await?;
    let category = SponsorshipType::CategorySponsor.as_str();
    for (entry, start, end) in [
        (1, factory::at(2025, 5, 1, 0, 0), factory::at(2025, 5, 31, 0, 0)),
        (2, factory::at(2025, 5, 20, 0, 0), factory::at(2025, 6, 5, 0, 0)),
        (3, factory::at(2025, 6, 20, 0, 0), factory::at(2025, 7, 20, 0, 0)),
        (4, factory::at(2025, 7, 2, 0, 0), factory::at(2025, 7, 30, 0, 0)),
    ] {
        test.sponsorship()
            .insert_listing(entry, category, Some(3), None, start, end)
            .await?;
    }

    let repo = SponsoredListingRepository::new(&test.db);
    let listings = repo
        .list_overlapping(
            SponsorshipTier::Category(3),
            factory::at(2025, 6, 1, 0, 0),
            factory::at(2025, 6, 30, 23, 59),
        )
        .await?;

    let mut entries: Vec<i32> = listings.iter().map(|l| l.directory_entry_id).collect();
    entries.sort();
    assert_eq!(entries, vec![2, 3]);

    Ok(())
}
