use chrono::NaiveDateTime;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
    QueryTrait,
};

use crate::server::{
    data::listing::active_listing_condition, model::tier::SponsorshipTier,
};

/// Directory statuses that take an entry out of the live directory.
pub const INACTIVE_STATUSES: [&str; 2] = ["Unknown", "Removed"];

pub struct DirectoryEntryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DirectoryEntryRepository<'a, C> {
    /// Creates a new instance of [`DirectoryEntryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::directory_entry::Model>, DbErr> {
        entity::prelude::DirectoryEntry::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Whether the entry exists and is still listed in the directory.
    pub async fn is_active(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self
            .find_by_id(id)
            .await?
            .is_some_and(|entry| !INACTIVE_STATUSES.contains(&entry.status.as_str())))
    }

    /// Counts active entries in a scope that do not already hold a running listing in `tier`.
    ///
    /// Main sponsorship is site-wide, so every active entry is in scope.
    pub async fn count_sellable(
        &self,
        tier: SponsorshipTier,
        now: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        let sponsored = entity::prelude::SponsoredListing::find()
            .select_only()
            .column(entity::sponsored_listing::Column::DirectoryEntryId)
            .filter(active_listing_condition(tier, now))
            .into_query();

        let mut query = entity::prelude::DirectoryEntry::find()
            .filter(entity::directory_entry::Column::Status.is_not_in(INACTIVE_STATUSES))
            .filter(entity::directory_entry::Column::Id.not_in_subquery(sponsored));

        query = match tier {
            SponsorshipTier::Main => query,
            SponsorshipTier::Category(id) => {
                query.filter(entity::directory_entry::Column::CategoryId.eq(id))
            }
            SponsorshipTier::Subcategory(id) => {
                query.filter(entity::directory_entry::Column::SubcategoryId.eq(id))
            }
        };

        query.count(self.db).await
    }
}
