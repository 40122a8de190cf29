use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sponsored_listing_invoice")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub invoice_id: String,
    pub directory_entry_id: i32,
    pub sponsorship_type: String,
    pub category_id: Option<i32>,
    pub subcategory_id: Option<i32>,
    pub campaign_start: Date,
    pub campaign_end: Date,
    pub payment_status: String,
    #[sea_orm(unique)]
    pub reservation_id: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sponsored_listing::Entity")]
    SponsoredListing,
}

impl Related<super::sponsored_listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SponsoredListing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
