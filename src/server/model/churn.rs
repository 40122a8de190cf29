use chrono::NaiveDate;

use crate::model::{churn::ChurnWindowDto, sponsorship::SponsorshipType};

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    /// Build a span, clamping `end` up to `start` when it precedes it.
    pub fn clamped(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start <= end && start <= self.end
    }
}

/// Optional narrowing of the paid spans considered by churn analytics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChurnFilter {
    pub sponsorship_type: Option<SponsorshipType>,
    pub category_id: Option<i32>,
    pub subcategory_id: Option<i32>,
}

/// Advertiser churn figures for an inclusive day window.
#[derive(Debug, Clone, PartialEq)]
pub struct ChurnWindowResult {
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub filter: ChurnFilter,
    pub active_at_start: u64,
    pub active_at_end: u64,
    pub unique_active_in_window: u64,
    pub activated_ids: Vec<i32>,
    pub churned_from_start_cohort_ids: Vec<i32>,
    pub gross_churned_ids: Vec<i32>,
    pub churn_rate: f64,
}

impl ChurnWindowResult {
    pub fn activated(&self) -> u64 {
        self.activated_ids.len() as u64
    }

    pub fn churned_from_start_cohort(&self) -> u64 {
        self.churned_from_start_cohort_ids.len() as u64
    }

    pub fn gross_churn(&self) -> u64 {
        self.gross_churned_ids.len() as u64
    }
}

impl From<ChurnWindowResult> for ChurnWindowDto {
    fn from(result: ChurnWindowResult) -> Self {
        Self {
            window_start: result.window_start,
            window_end: result.window_end,
            sponsorship_type: result.filter.sponsorship_type,
            category_id: result.filter.category_id,
            subcategory_id: result.filter.subcategory_id,
            active_at_start: result.active_at_start,
            active_at_end: result.active_at_end,
            activated: result.activated(),
            churned_from_start_cohort: result.churned_from_start_cohort(),
            gross_churn: result.gross_churn(),
            unique_active_in_window: result.unique_active_in_window,
            churn_rate: result.churn_rate,
            activated_ids: result.activated_ids,
            churned_from_start_cohort_ids: result.churned_from_start_cohort_ids,
            gross_churned_ids: result.gross_churned_ids,
        }
    }
}
