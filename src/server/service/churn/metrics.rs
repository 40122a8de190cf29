use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::server::model::churn::{ChurnFilter, ChurnWindowResult, DateSpan};

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Computes churn figures for the inclusive window `[start, end]`.
///
/// `merged` maps each advertiser to its merged presence periods, sorted by start.
pub fn compute_window(
    merged: &BTreeMap<i32, Vec<DateSpan>>,
    start: NaiveDate,
    end: NaiveDate,
    filter: ChurnFilter,
) -> ChurnWindowResult {
    let mut active_at_start = 0;
    let mut active_at_end = 0;
    let mut unique_active_in_window = 0;
    let mut activated_ids = Vec::new();
    let mut churned_from_start_cohort_ids = Vec::new();
    let mut gross_churned_ids = Vec::new();

    for (&advertiser_id, spans) in merged {
        let (Some(first), Some(last)) = (spans.first(), spans.last()) else {
            continue;
        };

        let at_start = spans.iter().any(|s| s.contains(start));
        let at_end = spans.iter().any(|s| s.contains(end));

        if at_start {
            active_at_start += 1;
        }
        if at_end {
            active_at_end += 1;
        }
        if spans.iter().any(|s| s.overlaps(start, end)) {
            unique_active_in_window += 1;
        }
        if !at_start && start < first.start && first.start <= end {
            activated_ids.push(advertiser_id);
        }
        if at_start && !at_end {
            churned_from_start_cohort_ids.push(advertiser_id);
        }
        if start <= last.end && last.end <= end {
            gross_churned_ids.push(advertiser_id);
        }
    }

    let churn_rate = if active_at_start == 0 {
        0.0
    } else {
        round4(churned_from_start_cohort_ids.len() as f64 / active_at_start as f64)
    };

    ChurnWindowResult {
        window_start: start,
        window_end: end,
        filter,
        active_at_start,
        active_at_end,
        unique_active_in_window,
        activated_ids,
        churned_from_start_cohort_ids,
        gross_churned_ids,
        churn_rate,
    }
}
