use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::sponsorship::SponsorshipType;

/// Query for churn over an inclusive day window
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ChurnQuery {
    /// First day of the window
    pub start: NaiveDate,
    /// Last day of the window, must be after `start`
    pub end: NaiveDate,
    pub sponsorship_type: Option<SponsorshipType>,
    pub category_id: Option<i32>,
    pub subcategory_id: Option<i32>,
}

/// Query for a monthly churn series
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MonthlyChurnQuery {
    /// Any day in the first month of the series
    pub start_month: NaiveDate,
    /// Any day in the month the series stops before
    pub end_month: NaiveDate,
    pub sponsorship_type: Option<SponsorshipType>,
    pub category_id: Option<i32>,
    pub subcategory_id: Option<i32>,
}

/// Advertiser churn figures for one window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChurnWindowDto {
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub sponsorship_type: Option<SponsorshipType>,
    pub category_id: Option<i32>,
    pub subcategory_id: Option<i32>,
    pub active_at_start: u64,
    pub active_at_end: u64,
    pub activated: u64,
    /// Start cohort members no longer active on the last day
    pub churned_from_start_cohort: u64,
    /// Advertisers whose last paid day falls inside the window
    pub gross_churn: u64,
    pub unique_active_in_window: u64,
    /// `churned_from_start_cohort / active_at_start`, rounded to 4 places
    pub churn_rate: f64,
    pub activated_ids: Vec<i32>,
    pub churned_from_start_cohort_ids: Vec<i32>,
    pub gross_churned_ids: Vec<i32>,
}
