//! Directory entry insertion utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::DirectoryEntryModel, TestContext};

/// Status stored on entries that count as sellable inventory.
pub static ACTIVE_STATUS: &str = "Verified";

/// Status stored on entries that were taken down.
pub static REMOVED_STATUS: &str = "Removed";

impl TestContext {
    pub fn directory<'a>(&'a self) -> DirectoryFixtures<'a> {
        DirectoryFixtures { setup: self }
    }
}

pub struct DirectoryFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> DirectoryFixtures<'a> {
    /// Insert a directory entry with the given scope and status.
    ///
    /// # Returns
    /// - `Ok(DirectoryEntryModel)` - The created entry
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_entry(
        &self,
        category_id: i32,
        subcategory_id: i32,
        status: &str,
    ) -> Result<DirectoryEntryModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::DirectoryEntry::insert(entity::directory_entry::ActiveModel {
                name: ActiveValue::Set(format!("Entry {}-{}", category_id, subcategory_id)),
                category_id: ActiveValue::Set(category_id),
                subcategory_id: ActiveValue::Set(subcategory_id),
                status: ActiveValue::Set(status.to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert `count` active entries in one category and subcategory.
    pub async fn insert_active_entries(
        &self,
        count: usize,
        category_id: i32,
        subcategory_id: i32,
    ) -> Result<Vec<DirectoryEntryModel>, TestError> {
        let mut entries = Vec::with_capacity(count);
        for _ in 0..count {
            entries.push(
                self.insert_entry(category_id, subcategory_id, ACTIVE_STATUS)
                    .await?,
            );
        }

        Ok(entries)
    }
}
