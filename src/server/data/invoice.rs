use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

use crate::server::model::{activation::ActivationRequest, churn::ChurnFilter};

/// Payment status stored on settled invoices.
pub const PAID_STATUS: &str = "Paid";

pub struct InvoiceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InvoiceRepository<'a, C> {
    /// Creates a new instance of [`InvoiceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a settled invoice.
    ///
    /// Both the invoice token and the consumed reservation token are unique columns.
    pub async fn create_paid(
        &self,
        request: &ActivationRequest,
        now: NaiveDateTime,
    ) -> Result<entity::sponsored_listing_invoice::Model, DbErr> {
        let invoice = entity::sponsored_listing_invoice::ActiveModel {
            invoice_id: ActiveValue::Set(request.invoice_id.clone()),
            directory_entry_id: ActiveValue::Set(request.directory_entry_id),
            sponsorship_type: ActiveValue::Set(request.tier.kind().as_str().to_string()),
            category_id: ActiveValue::Set(request.tier.category_id()),
            subcategory_id: ActiveValue::Set(request.tier.subcategory_id()),
            campaign_start: ActiveValue::Set(request.campaign_start),
            campaign_end: ActiveValue::Set(request.campaign_end),
            payment_status: ActiveValue::Set(PAID_STATUS.to_string()),
            reservation_id: ActiveValue::Set(request.reservation_id.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        invoice.insert(self.db).await
    }

    /// Lists `(directory_entry_id, campaign_start, campaign_end)` for every paid invoice
    /// matching `filter`.
    pub async fn list_paid_spans(
        &self,
        filter: &ChurnFilter,
    ) -> Result<Vec<(i32, NaiveDate, NaiveDate)>, DbErr> {
        use entity::sponsored_listing_invoice::Column;

        let mut query = entity::prelude::SponsoredListingInvoice::find()
            .select_only()
            .column(Column::DirectoryEntryId)
            .column(Column::CampaignStart)
            .column(Column::CampaignEnd)
            .filter(Column::PaymentStatus.eq(PAID_STATUS));

        if let Some(kind) = filter.sponsorship_type {
            query = query.filter(Column::SponsorshipType.eq(kind.as_str()));
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(Column::CategoryId.eq(category_id));
        }
        if let Some(subcategory_id) = filter.subcategory_id {
            query = query.filter(Column::SubcategoryId.eq(subcategory_id));
        }

        query
            .into_tuple::<(i32, NaiveDate, NaiveDate)>()
            .all(self.db)
            .await
    }
}
