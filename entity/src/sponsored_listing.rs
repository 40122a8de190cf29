use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sponsored_listing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub directory_entry_id: i32,
    pub sponsorship_type: String,
    pub category_id: Option<i32>,
    pub subcategory_id: Option<i32>,
    pub campaign_start: DateTime,
    pub campaign_end: DateTime,
    #[sea_orm(unique)]
    pub sponsored_listing_invoice_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sponsored_listing_invoice::Entity",
        from = "Column::SponsoredListingInvoiceId",
        to = "super::sponsored_listing_invoice::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    SponsoredListingInvoice,
}

impl Related<super::sponsored_listing_invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SponsoredListingInvoice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
