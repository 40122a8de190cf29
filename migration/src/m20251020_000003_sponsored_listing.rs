use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251020_000001_directory_entry::DirectoryEntry,
    m20251020_000002_sponsored_listing_invoice::SponsoredListingInvoice,
};

static IDX_LISTING_DIRECTORY_ENTRY_ID: &str = "idx-sponsored_listing-directory_entry_id";
static IDX_LISTING_TYPE_CAMPAIGN: &str = "idx-sponsored_listing-type-campaign";
static FK_LISTING_DIRECTORY_ENTRY_ID: &str = "fk-sponsored_listing-directory_entry_id";
static FK_LISTING_INVOICE_ID: &str = "fk-sponsored_listing-sponsored_listing_invoice_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SponsoredListing::Table)
                    .if_not_exists()
                    .col(pk_auto(SponsoredListing::Id))
                    .col(integer(SponsoredListing::DirectoryEntryId))
                    .col(string(SponsoredListing::SponsorshipType))
                    .col(integer_null(SponsoredListing::CategoryId))
                    .col(integer_null(SponsoredListing::SubcategoryId))
                    .col(timestamp(SponsoredListing::CampaignStart))
                    .col(timestamp(SponsoredListing::CampaignEnd))
                    .col(integer_uniq(SponsoredListing::SponsoredListingInvoiceId))
                    .col(timestamp(SponsoredListing::CreatedAt))
                    .col(timestamp(SponsoredListing::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LISTING_DIRECTORY_ENTRY_ID)
                    .table(SponsoredListing::Table)
                    .col(SponsoredListing::DirectoryEntryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LISTING_TYPE_CAMPAIGN)
                    .table(SponsoredListing::Table)
                    .col(SponsoredListing::SponsorshipType)
                    .col(SponsoredListing::CampaignStart)
                    .col(SponsoredListing::CampaignEnd)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LISTING_DIRECTORY_ENTRY_ID)
                    .from_tbl(SponsoredListing::Table)
                    .from_col(SponsoredListing::DirectoryEntryId)
                    .to_tbl(DirectoryEntry::Table)
                    .to_col(DirectoryEntry::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LISTING_INVOICE_ID)
                    .from_tbl(SponsoredListing::Table)
                    .from_col(SponsoredListing::SponsoredListingInvoiceId)
                    .to_tbl(SponsoredListingInvoice::Table)
                    .to_col(SponsoredListingInvoice::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LISTING_INVOICE_ID)
                    .table(SponsoredListing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LISTING_DIRECTORY_ENTRY_ID)
                    .table(SponsoredListing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LISTING_TYPE_CAMPAIGN)
                    .table(SponsoredListing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LISTING_DIRECTORY_ENTRY_ID)
                    .table(SponsoredListing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SponsoredListing::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SponsoredListing {
    Table,
    Id,
    DirectoryEntryId,
    SponsorshipType,
    CategoryId,
    SubcategoryId,
    CampaignStart,
    CampaignEnd,
    SponsoredListingInvoiceId,
    CreatedAt,
    UpdatedAt,
}
