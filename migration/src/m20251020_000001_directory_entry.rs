use sea_orm_migration::{prelude::*, schema::*};

static IDX_DIRECTORY_ENTRY_CATEGORY_ID: &str = "idx-directory_entry-category_id";
static IDX_DIRECTORY_ENTRY_SUBCATEGORY_ID: &str = "idx-directory_entry-subcategory_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DirectoryEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(DirectoryEntry::Id))
                    .col(string(DirectoryEntry::Name))
                    .col(integer(DirectoryEntry::CategoryId))
                    .col(integer(DirectoryEntry::SubcategoryId))
                    .col(string(DirectoryEntry::Status))
                    .col(timestamp(DirectoryEntry::CreatedAt))
                    .col(timestamp(DirectoryEntry::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DIRECTORY_ENTRY_CATEGORY_ID)
                    .table(DirectoryEntry::Table)
                    .col(DirectoryEntry::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DIRECTORY_ENTRY_SUBCATEGORY_ID)
                    .table(DirectoryEntry::Table)
                    .col(DirectoryEntry::SubcategoryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DIRECTORY_ENTRY_SUBCATEGORY_ID)
                    .table(DirectoryEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DIRECTORY_ENTRY_CATEGORY_ID)
                    .table(DirectoryEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DirectoryEntry::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DirectoryEntry {
    Table,
    Id,
    Name,
    CategoryId,
    SubcategoryId,
    Status,
    CreatedAt,
    UpdatedAt,
}
