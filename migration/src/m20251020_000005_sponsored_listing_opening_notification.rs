use sea_orm_migration::{prelude::*, schema::*};

static IDX_NOTIFICATION_PENDING: &str =
    "idx-sponsored_listing_opening_notification-type-type_id-subscribed_at";
static UQ_NOTIFICATION_ACTIVE_SUBSCRIPTION: &str =
    "uq-sponsored_listing_opening_notification-active-subscription";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SponsoredListingOpeningNotification::Table)
                    .if_not_exists()
                    .col(pk_auto(SponsoredListingOpeningNotification::Id))
                    .col(string(SponsoredListingOpeningNotification::Email))
                    .col(string(SponsoredListingOpeningNotification::SponsorshipType))
                    .col(integer_null(SponsoredListingOpeningNotification::TypeId))
                    .col(integer_null(
                        SponsoredListingOpeningNotification::DirectoryEntryId,
                    ))
                    .col(timestamp(SponsoredListingOpeningNotification::SubscribedAt))
                    .col(boolean(SponsoredListingOpeningNotification::IsActive))
                    .col(boolean(SponsoredListingOpeningNotification::IsReminderSent))
                    .col(timestamp_null(
                        SponsoredListingOpeningNotification::ReminderSentAt,
                    ))
                    .col(text_null(
                        SponsoredListingOpeningNotification::ReminderSentLink,
                    ))
                    .col(timestamp(SponsoredListingOpeningNotification::CreatedAt))
                    .col(timestamp(SponsoredListingOpeningNotification::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NOTIFICATION_PENDING)
                    .table(SponsoredListingOpeningNotification::Table)
                    .col(SponsoredListingOpeningNotification::SponsorshipType)
                    .col(SponsoredListingOpeningNotification::TypeId)
                    .col(SponsoredListingOpeningNotification::SubscribedAt)
                    .to_owned(),
            )
            .await?;

        // Scoped rows only; main-tier subscriptions carry no type id.
        manager
            .get_connection()
            .execute_unprepared(&format!(
                r#"CREATE UNIQUE INDEX IF NOT EXISTS "{UQ_NOTIFICATION_ACTIVE_SUBSCRIPTION}"
                   ON "sponsored_listing_opening_notification"
                   ("email", "sponsorship_type", "type_id", "subscribed_at")
                   WHERE "type_id" IS NOT NULL AND "is_active""#
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(&format!(
                r#"DROP INDEX IF EXISTS "{UQ_NOTIFICATION_ACTIVE_SUBSCRIPTION}""#
            ))
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_NOTIFICATION_PENDING)
                    .table(SponsoredListingOpeningNotification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(SponsoredListingOpeningNotification::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SponsoredListingOpeningNotification {
    Table,
    Id,
    Email,
    SponsorshipType,
    TypeId,
    DirectoryEntryId,
    SubscribedAt,
    IsActive,
    IsReminderSent,
    ReminderSentAt,
    ReminderSentLink,
    CreatedAt,
    UpdatedAt,
}
