use sea_orm_migration::{prelude::*, schema::*};

static IDX_RESERVATION_GROUP_EXPIRES_AT: &str =
    "idx-sponsored_listing_reservation-reservation_group-expires_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SponsoredListingReservation::Table)
                    .if_not_exists()
                    .col(pk_auto(SponsoredListingReservation::Id))
                    .col(string_uniq(SponsoredListingReservation::ReservationId))
                    .col(string(SponsoredListingReservation::ReservationGroup))
                    .col(text_null(SponsoredListingReservation::Detail))
                    .col(timestamp(SponsoredListingReservation::ExpiresAt))
                    .col(timestamp(SponsoredListingReservation::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RESERVATION_GROUP_EXPIRES_AT)
                    .table(SponsoredListingReservation::Table)
                    .col(SponsoredListingReservation::ReservationGroup)
                    .col(SponsoredListingReservation::ExpiresAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RESERVATION_GROUP_EXPIRES_AT)
                    .table(SponsoredListingReservation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(SponsoredListingReservation::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SponsoredListingReservation {
    Table,
    Id,
    ReservationId,
    ReservationGroup,
    Detail,
    ExpiresAt,
    CreatedAt,
}
