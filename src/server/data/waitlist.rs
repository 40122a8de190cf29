use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::sponsorship::SponsorshipType,
    server::model::{db::WaitlistEntryModel, tier::SponsorshipTier},
};

use entity::sponsored_listing_opening_notification::{ActiveModel, Column, Entity};

/// Condition selecting rows in `tier`'s scope. Main rows carry a null `type_id`.
fn scope_condition(tier: SponsorshipTier) -> Condition {
    let condition = Condition::all().add(Column::SponsorshipType.eq(tier.kind().as_str()));

    match tier.scope_id() {
        Some(type_id) => condition.add(Column::TypeId.eq(type_id)),
        None => condition.add(Column::TypeId.is_null()),
    }
}

/// Condition selecting subscriptions still waiting for an opening notification.
fn waiting_condition() -> Condition {
    Condition::all()
        .add(Column::IsActive.eq(true))
        .add(Column::IsReminderSent.eq(false))
}

pub struct WaitlistRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WaitlistRepository<'a, C> {
    /// Creates a new instance of [`WaitlistRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<WaitlistEntryModel>, DbErr> {
        Entity::find_by_id(id).one(self.db).await
    }

    /// Finds the live subscription for `email` in `tier`, if any.
    pub async fn find_active(
        &self,
        email: &str,
        tier: SponsorshipTier,
    ) -> Result<Option<WaitlistEntryModel>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email))
            .filter(scope_condition(tier))
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Id)
            .one(self.db)
            .await
    }

    /// Inserts a new active, unreminded subscription stamped at `now`.
    pub async fn create(
        &self,
        email: &str,
        tier: SponsorshipTier,
        directory_entry_id: Option<i32>,
        now: NaiveDateTime,
    ) -> Result<WaitlistEntryModel, DbErr> {
        let entry = ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            sponsorship_type: ActiveValue::Set(tier.kind().as_str().to_string()),
            type_id: ActiveValue::Set(tier.scope_id()),
            directory_entry_id: ActiveValue::Set(directory_entry_id),
            subscribed_at: ActiveValue::Set(now),
            is_active: ActiveValue::Set(true),
            is_reminder_sent: ActiveValue::Set(false),
            reminder_sent_at: ActiveValue::Set(None),
            reminder_sent_link: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entry.insert(self.db).await
    }

    /// Points an existing subscription at a different directory entry.
    ///
    /// Queue position and reminder state are left untouched.
    pub async fn update_directory_entry(
        &self,
        entry: WaitlistEntryModel,
        directory_entry_id: Option<i32>,
        now: NaiveDateTime,
    ) -> Result<WaitlistEntryModel, DbErr> {
        let mut entry = entry.into_active_model();
        entry.directory_entry_id = ActiveValue::Set(directory_entry_id);
        entry.updated_at = ActiveValue::Set(now);

        entry.update(self.db).await
    }

    /// Records a delivered opening notification and closes the subscription cycle.
    pub async fn mark_reminder_sent(
        &self,
        entry: WaitlistEntryModel,
        link: &str,
        now: NaiveDateTime,
    ) -> Result<WaitlistEntryModel, DbErr> {
        let mut entry = entry.into_active_model();
        entry.is_reminder_sent = ActiveValue::Set(true);
        entry.is_active = ActiveValue::Set(false);
        entry.reminder_sent_at = ActiveValue::Set(Some(now));
        entry.reminder_sent_link = ActiveValue::Set(Some(link.trim().to_string()));
        entry.updated_at = ActiveValue::Set(now);

        entry.update(self.db).await
    }

    /// Waiting subscribers in `tier`, first subscribed first.
    pub async fn pending_queue(
        &self,
        tier: SponsorshipTier,
    ) -> Result<Vec<WaitlistEntryModel>, DbErr> {
        Entity::find()
            .filter(scope_condition(tier))
            .filter(waiting_condition())
            .order_by_asc(Column::SubscribedAt)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }

    /// Distinct scope ids that have waiting subscribers for `kind`.
    ///
    /// Main subscriptions yield a single `None`.
    pub async fn pending_scopes(&self, kind: SponsorshipType) -> Result<Vec<Option<i32>>, DbErr> {
        Entity::find()
            .select_only()
            .column(Column::TypeId)
            .distinct()
            .filter(Column::SponsorshipType.eq(kind.as_str()))
            .filter(waiting_condition())
            .order_by_asc(Column::TypeId)
            .into_tuple::<Option<i32>>()
            .all(self.db)
            .await
    }

    /// Counts active, unreminded entries in `tier`.
    pub async fn count_waiting(&self, tier: SponsorshipTier) -> Result<u64, DbErr> {
        Entity::find()
            .filter(scope_condition(tier))
            .filter(waiting_condition())
            .count(self.db)
            .await
    }

    /// Waiting subscribers in `tier`, newest first.
    pub async fn list_waiting(
        &self,
        tier: SponsorshipTier,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<WaitlistEntryModel>, DbErr> {
        Entity::find()
            .filter(scope_condition(tier))
            .filter(waiting_condition())
            .order_by_desc(Column::SubscribedAt)
            .order_by_desc(Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }
}
