use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_directory_entry::DirectoryEntry;

static IDX_INVOICE_DIRECTORY_ENTRY_ID: &str = "idx-sponsored_listing_invoice-directory_entry_id";
static FK_INVOICE_DIRECTORY_ENTRY_ID: &str = "fk-sponsored_listing_invoice-directory_entry_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SponsoredListingInvoice::Table)
                    .if_not_exists()
                    .col(pk_auto(SponsoredListingInvoice::Id))
                    .col(string_uniq(SponsoredListingInvoice::InvoiceId))
                    .col(integer(SponsoredListingInvoice::DirectoryEntryId))
                    .col(string(SponsoredListingInvoice::SponsorshipType))
                    .col(integer_null(SponsoredListingInvoice::CategoryId))
                    .col(integer_null(SponsoredListingInvoice::SubcategoryId))
                    .col(date(SponsoredListingInvoice::CampaignStart))
                    .col(date(SponsoredListingInvoice::CampaignEnd))
                    .col(string(SponsoredListingInvoice::PaymentStatus))
                    .col(string_null(SponsoredListingInvoice::ReservationId).unique_key())
                    .col(timestamp(SponsoredListingInvoice::CreatedAt))
                    .col(timestamp(SponsoredListingInvoice::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVOICE_DIRECTORY_ENTRY_ID)
                    .table(SponsoredListingInvoice::Table)
                    .col(SponsoredListingInvoice::DirectoryEntryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INVOICE_DIRECTORY_ENTRY_ID)
                    .from_tbl(SponsoredListingInvoice::Table)
                    .from_col(SponsoredListingInvoice::DirectoryEntryId)
                    .to_tbl(DirectoryEntry::Table)
                    .to_col(DirectoryEntry::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_INVOICE_DIRECTORY_ENTRY_ID)
                    .table(SponsoredListingInvoice::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INVOICE_DIRECTORY_ENTRY_ID)
                    .table(SponsoredListingInvoice::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(SponsoredListingInvoice::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SponsoredListingInvoice {
    Table,
    Id,
    InvoiceId,
    DirectoryEntryId,
    SponsorshipType,
    CategoryId,
    SubcategoryId,
    CampaignStart,
    CampaignEnd,
    PaymentStatus,
    ReservationId,
    CreatedAt,
    UpdatedAt,
}
