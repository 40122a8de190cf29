use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::{activation::ActivationRequest, tier::SponsorshipTier};

/// Condition selecting listings of `tier` whose campaign covers `now`.
pub(crate) fn active_listing_condition(tier: SponsorshipTier, now: NaiveDateTime) -> Condition {
    overlapping_condition(tier, now, now)
}

/// Condition selecting listings of `tier` whose campaign intersects `[from, to]`.
fn overlapping_condition(
    tier: SponsorshipTier,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> Condition {
    use entity::sponsored_listing::Column;

    let mut condition = Condition::all()
        .add(Column::SponsorshipType.eq(tier.kind().as_str()))
        .add(Column::CampaignStart.lte(to))
        .add(Column::CampaignEnd.gte(from));

    if let Some(category_id) = tier.category_id() {
        condition = condition.add(Column::CategoryId.eq(category_id));
    }
    if let Some(subcategory_id) = tier.subcategory_id() {
        condition = condition.add(Column::SubcategoryId.eq(subcategory_id));
    }

    condition
}

pub struct SponsoredListingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SponsoredListingRepository<'a, C> {
    /// Creates a new instance of [`SponsoredListingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Counts listings in `tier` whose campaign window contains `now`.
    pub async fn count_active(
        &self,
        tier: SponsorshipTier,
        now: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        entity::prelude::SponsoredListing::find()
            .filter(active_listing_condition(tier, now))
            .count(self.db)
            .await
    }

    /// Lists listings in `tier` whose campaign intersects the inclusive range `[from, to]`.
    pub async fn list_overlapping(
        &self,
        tier: SponsorshipTier,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<entity::sponsored_listing::Model>, DbErr> {
        entity::prelude::SponsoredListing::find()
            .filter(overlapping_condition(tier, from, to))
            .all(self.db)
            .await
    }

    /// Inserts the listing promoted from a paid invoice.
    ///
    /// The invoice reference is unique, so promoting the same invoice twice fails.
    pub async fn create(
        &self,
        invoice_pk: i32,
        request: &ActivationRequest,
        now: NaiveDateTime,
    ) -> Result<entity::sponsored_listing::Model, DbErr> {
        let (campaign_start, campaign_end) = request.campaign_window();

        let listing = entity::sponsored_listing::ActiveModel {
            directory_entry_id: ActiveValue::Set(request.directory_entry_id),
            sponsorship_type: ActiveValue::Set(request.tier.kind().as_str().to_string()),
            category_id: ActiveValue::Set(request.tier.category_id()),
            subcategory_id: ActiveValue::Set(request.tier.subcategory_id()),
            campaign_start: ActiveValue::Set(campaign_start),
            campaign_end: ActiveValue::Set(campaign_end),
            sponsored_listing_invoice_id: ActiveValue::Set(invoice_pk),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        listing.insert(self.db).await
    }
}
