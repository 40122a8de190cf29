//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together and queued, then executed during the final
//! `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// directory inventory fixtures.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_sponsorship_tables: bool,

    // Database fixtures to insert
    directory_entries: Vec<(usize, i32, i32)>, // (count, category_id, subcategory_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_sponsorship_tables: false,
            directory_entries: Vec::new(),
        }
    }

    /// Add every table used by sponsored-listing capacity management.
    ///
    /// Creates DirectoryEntry, SponsoredListingInvoice, SponsoredListing,
    /// SponsoredListingReservation and SponsoredListingOpeningNotification.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_sponsorship_tables(mut self) -> Self {
        self.include_sponsorship_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use slotwarden_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), slotwarden_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::SponsoredListingReservation)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert `count` active directory entries in the given category and subcategory.
    ///
    /// Queues the entries to be inserted during `build()`. Requires the DirectoryEntry table.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_active_entries(
        mut self,
        count: usize,
        category_id: i32,
        subcategory_id: i32,
    ) -> Self {
        self.directory_entries
            .push((count, category_id, subcategory_id));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_sponsorship_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::DirectoryEntry),
                schema.create_table_from_entity(entity::prelude::SponsoredListingInvoice),
                schema.create_table_from_entity(entity::prelude::SponsoredListing),
                schema.create_table_from_entity(entity::prelude::SponsoredListingReservation),
                schema.create_table_from_entity(
                    entity::prelude::SponsoredListingOpeningNotification,
                ),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (count, category_id, subcategory_id) in self.directory_entries {
            setup
                .directory()
                .insert_active_entries(count, category_id, subcategory_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
