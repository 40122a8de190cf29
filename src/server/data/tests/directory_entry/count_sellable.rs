//! Tests for DirectoryEntryRepository::count_sellable method.
//!
//! This module verifies that sellable inventory only counts active entries in the requested
//! scope which are not already running a listing in the same tier.

use slotwarden_test_utils::fixtures::directory::REMOVED_STATUS;

use super::*;

/// Tests counting active entries in a category.
///
/// Expected: Ok with count of active entries in category 1 only
#[tokio::test]
async fn counts_active_entries_in_scope() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sponsorship_tables()
        .with_active_entries(4, 1, 10)
        .with_active_entries(2, 2, 20)
        .build()
        .await?;
    let now = factory::at(2025, 3, 1, 12, 0);

    let repo = DirectoryEntryRepository::new(&test.db);
    let count = repo.count_sellable(SponsorshipTier::Category(1), now).await?;

    assert_eq!(count, 4);

    Ok(())
}

/// Tests that removed entries are not sellable inventory.
///
/// Expected: Ok with removed entry excluded
#[tokio::test]
async fn excludes_removed_entries() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sponsorship_tables()
        .with_active_entries(3, 1, 10)
        .build()
        .await?;
    test.directory().insert_entry(1, 10, REMOVED_STATUS).await?;
    test.directory().insert_entry(1, 10, "Unknown").await?;
    let now = factory::at(2025, 3, 1, 12, 0);

    let repo = DirectoryEntryRepository::new(&test.db);
    let count = repo
        .count_sellable(SponsorshipTier::Subcategory(10), now)
        .await?;

    assert_eq!(count, 3);

    Ok(())
}

/// Tests that entries already sponsored in the tier are excluded.
///
/// Verifies only a listing running at `now` in the same tier and scope removes an entry from
/// sellable inventory; an expired listing does not.
///
/// Expected: Ok with the currently sponsored entry excluded
#[tokio::test]
async fn excludes_entries_with_running_listing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sponsorship_tables()
        .with_active_entries(3, 1, 10)
        .build()
        .await?;
    let now = factory::at(2025, 3, 1, 12, 0);
    let entries = test.directory().insert_active_entries(2, 1, 10).await?;
    test.sponsorship()
        .insert_active_listing(
            entries[0].id,
            SponsorshipType::CategorySponsor.as_str(),
            Some(1),
            None,
            now,
        )
        .await?;
    test.sponsorship()
        .insert_listing(
            entries[1].id,
            SponsorshipType::CategorySponsor.as_str(),
            Some(1),
            None,
            factory::at(2025, 1, 1, 0, 0),
            factory::at(2025, 1, 31, 23, 59),
        )
        .await?;

    let repo = DirectoryEntryRepository::new(&test.db);
    let count = repo.count_sellable(SponsorshipTier::Category(1), now).await?;

    assert_eq!(count, 4);

    Ok(())
}
