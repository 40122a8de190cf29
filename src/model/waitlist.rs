use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::sponsorship::SponsorshipType;

/// One sponsorship flavor a subscriber wants to hear about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct WaitlistScopeDto {
    pub sponsorship_type: SponsorshipType,
    /// Category or subcategory id; omitted for main sponsorship
    pub type_id: Option<i32>,
}

/// Request body for subscribing to opening notifications
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscribeDto {
    pub email: String,
    /// Directory entry the subscriber intends to promote
    pub directory_entry_id: Option<i32>,
    pub scopes: Vec<WaitlistScopeDto>,
}

/// Query for the paged waitlist listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WaitlistQuery {
    pub sponsorship_type: SponsorshipType,
    pub type_id: Option<i32>,
    /// 1-based page number, defaults to 1
    pub page: Option<u64>,
    /// Entries per page, defaults to 10
    pub page_size: Option<u64>,
}

/// A waitlist subscription as displayed to administrators
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WaitlistEntryDto {
    pub id: i32,
    pub email: String,
    pub directory_entry_id: Option<i32>,
    pub subscribed_at: NaiveDateTime,
    pub is_reminder_sent: bool,
}

/// One page of waiting subscribers, newest first
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WaitlistPageDto {
    /// Total subscribers waiting in the scope
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub entries: Vec<WaitlistEntryDto>,
}
