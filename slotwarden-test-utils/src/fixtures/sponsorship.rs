//! Paid invoice, active listing and reservation insertion utilities.
//!
//! Listings reference their invoice through a foreign key, so listing fixtures always
//! insert a backing paid invoice first.

use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{InvoiceModel, ListingModel, ReservationModel},
    TestContext,
};

impl TestContext {
    pub fn sponsorship<'a>(&'a self) -> SponsorshipFixtures<'a> {
        SponsorshipFixtures { setup: self }
    }
}

pub struct SponsorshipFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> SponsorshipFixtures<'a> {
    /// Insert a paid invoice covering `campaign_start..=campaign_end`.
    ///
    /// # Arguments
    /// - `directory_entry_id` - Advertiser the invoice belongs to
    /// - `sponsorship_type` - Stored sponsorship type name
    /// - `category_id` / `subcategory_id` - Scope of the campaign
    /// - `campaign_start` / `campaign_end` - Inclusive campaign dates
    pub async fn insert_paid_invoice(
        &self,
        directory_entry_id: i32,
        sponsorship_type: &str,
        category_id: Option<i32>,
        subcategory_id: Option<i32>,
        campaign_start: NaiveDate,
        campaign_end: NaiveDate,
    ) -> Result<InvoiceModel, TestError> {
        self.insert_invoice(
            directory_entry_id,
            sponsorship_type,
            category_id,
            subcategory_id,
            campaign_start,
            campaign_end,
            "Paid",
        )
        .await
    }

    /// Insert an invoice with an explicit payment status.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert_invoice(
        &self,
        directory_entry_id: i32,
        sponsorship_type: &str,
        category_id: Option<i32>,
        subcategory_id: Option<i32>,
        campaign_start: NaiveDate,
        campaign_end: NaiveDate,
        payment_status: &str,
    ) -> Result<InvoiceModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::SponsoredListingInvoice::insert(
            entity::sponsored_listing_invoice::ActiveModel {
                invoice_id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
                directory_entry_id: ActiveValue::Set(directory_entry_id),
                sponsorship_type: ActiveValue::Set(sponsorship_type.to_string()),
                category_id: ActiveValue::Set(category_id),
                subcategory_id: ActiveValue::Set(subcategory_id),
                campaign_start: ActiveValue::Set(campaign_start),
                campaign_end: ActiveValue::Set(campaign_end),
                payment_status: ActiveValue::Set(payment_status.to_string()),
                reservation_id: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert an active listing whose campaign window spans `now`.
    ///
    /// The campaign runs from one day before `now` until thirty days after it.
    pub async fn insert_active_listing(
        &self,
        directory_entry_id: i32,
        sponsorship_type: &str,
        category_id: Option<i32>,
        subcategory_id: Option<i32>,
        now: NaiveDateTime,
    ) -> Result<ListingModel, TestError> {
        self.insert_listing(
            directory_entry_id,
            sponsorship_type,
            category_id,
            subcategory_id,
            now - Duration::days(1),
            now + Duration::days(30),
        )
        .await
    }

    /// Insert a listing with an explicit campaign window, backed by a paid invoice.
    pub async fn insert_listing(
        &self,
        directory_entry_id: i32,
        sponsorship_type: &str,
        category_id: Option<i32>,
        subcategory_id: Option<i32>,
        campaign_start: NaiveDateTime,
        campaign_end: NaiveDateTime,
    ) -> Result<ListingModel, TestError> {
        let invoice = self
            .insert_paid_invoice(
                directory_entry_id,
                sponsorship_type,
                category_id,
                subcategory_id,
                campaign_start.date(),
                campaign_end.date(),
            )
            .await?;
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::SponsoredListing::insert(
            entity::sponsored_listing::ActiveModel {
                directory_entry_id: ActiveValue::Set(directory_entry_id),
                sponsorship_type: ActiveValue::Set(sponsorship_type.to_string()),
                category_id: ActiveValue::Set(category_id),
                subcategory_id: ActiveValue::Set(subcategory_id),
                campaign_start: ActiveValue::Set(campaign_start),
                campaign_end: ActiveValue::Set(campaign_end),
                sponsored_listing_invoice_id: ActiveValue::Set(invoice.id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a reservation hold in `reservation_group` expiring at `expires_at`.
    pub async fn insert_reservation(
        &self,
        reservation_group: &str,
        expires_at: NaiveDateTime,
    ) -> Result<ReservationModel, TestError> {
        Ok(entity::prelude::SponsoredListingReservation::insert(
            entity::sponsored_listing_reservation::ActiveModel {
                reservation_id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
                reservation_group: ActiveValue::Set(reservation_group.to_string()),
                detail: ActiveValue::Set(None),
                expires_at: ActiveValue::Set(expires_at),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
