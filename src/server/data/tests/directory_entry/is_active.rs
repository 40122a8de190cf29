use slotwarden_test_utils::fixtures::directory::{ACTIVE_STATUS, REMOVED_STATUS};

use super::*;

/// Expect true for a listed entry
#[tokio::test]
async fn active_entry_is_active() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;
    let entry = test.directory().insert_entry(1, 1, ACTIVE_STATUS).await?;

    let repo = DirectoryEntryRepository::new(&test.db);

    assert!(repo.is_active(entry.id).await?);

    Ok(())
}

/// Expect false for a removed or missing entry
#[tokio::test]
async fn removed_or_missing_entry_is_inactive() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;
    let entry = test.directory().insert_entry(1, 1, REMOVED_STATUS).await?;

    let repo = DirectoryEntryRepository::new(&test.db);

    assert!(!repo.is_active(entry.id).await?);
    assert!(!repo.is_active(entry.id + 100).await?);

    Ok(())
}
