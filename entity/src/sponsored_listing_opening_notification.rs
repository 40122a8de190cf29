use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sponsored_listing_opening_notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: String,
    pub sponsorship_type: String,
    pub type_id: Option<i32>,
    pub directory_entry_id: Option<i32>,
    pub subscribed_at: DateTime,
    pub is_active: bool,
    pub is_reminder_sent: bool,
    pub reminder_sent_at: Option<DateTime>,
    pub reminder_sent_link: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
