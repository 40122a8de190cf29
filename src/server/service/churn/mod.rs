//! Advertiser churn analytics over paid campaign history.
//!
//! Paid invoices are read once per request, merged per advertiser into continuous presence
//! periods and then classified against one or more day windows. Nothing is persisted.

pub mod interval;
pub mod metrics;


use std::collections::BTreeMap;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::invoice::InvoiceRepository,
    error::{churn::ChurnError, Error},
    model::churn::{ChurnFilter, ChurnWindowResult, DateSpan},
    service::{
        churn::{interval::merge_spans, metrics::compute_window},
        retry::RetryContext,
    },
    util::time::{month_start, month_window, next_month_start},
};

pub struct ChurnAnalyticsEngine<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChurnAnalyticsEngine<'a> {
    /// Creates a new instance of [`ChurnAnalyticsEngine`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Churn figures for the inclusive window `[start, end]`.
    ///
    /// # Returns
    /// - `Ok(ChurnWindowResult)` - Figures for the window, all zero without paid history
    /// - `Err(ChurnError::InvalidWindow)` - `end` is not after `start`
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_churn(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        filter: ChurnFilter,
    ) -> Result<ChurnWindowResult, Error> {
        if end <= start {
            return Err(ChurnError::InvalidWindow { start, end }.into());
        }

        let merged = self.load_merged(filter).await?;

        Ok(compute_window(&merged, start, end, filter))
    }

    /// Churn figures for the calendar month containing `month`.
    pub async fn get_monthly_churn(
        &self,
        month: NaiveDate,
        filter: ChurnFilter,
    ) -> Result<ChurnWindowResult, Error> {
        let (first, last) = month_window(month).ok_or(ChurnError::InvalidSeries {
            start: month,
            end: month,
        })?;

        self.get_churn(first, last, filter).await
    }

    /// One result per calendar month from the month of `start_month` up to, but excluding,
    /// the month of `end_month`.
    ///
    /// Paid history is loaded once for the whole series.
    ///
    /// # Returns
    /// - `Ok(Vec<ChurnWindowResult>)` - One entry per month, in order
    /// - `Err(ChurnError::InvalidSeries)` - End month is not after start month
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_monthly_series(
        &self,
        start_month: NaiveDate,
        end_month: NaiveDate,
        filter: ChurnFilter,
    ) -> Result<Vec<ChurnWindowResult>, Error> {
        let first_month = month_start(start_month);
        let stop_month = month_start(end_month);
        let invalid = ChurnError::InvalidSeries {
            start: first_month,
            end: stop_month,
        };

        if stop_month <= first_month {
            return Err(invalid.into());
        }

        let merged = self.load_merged(filter).await?;

        let mut series = Vec::new();
        let mut month = first_month;
        while month < stop_month {
            let Some((first, last)) = month_window(month) else {
                return Err(invalid.into());
            };
            series.push(compute_window(&merged, first, last, filter));

            let Some(next) = next_month_start(month) else {
                return Err(invalid.into());
            };
            month = next;
        }

        tracing::debug!(
            "Computed churn series of {} month(s) starting {}",
            series.len(),
            first_month
        );

        Ok(series)
    }

    /// Loads paid spans matching `filter` and merges them per advertiser.
    async fn load_merged(
        &self,
        filter: ChurnFilter,
    ) -> Result<BTreeMap<i32, Vec<DateSpan>>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        let rows = ctx
            .execute_with_retry("load paid campaign spans", |_| {
                let db = db.clone();

                Box::pin(async move {
                    let invoice_repo = InvoiceRepository::new(&db);

                    Ok(invoice_repo.list_paid_spans(&filter).await?)
                })
            })
            .await?;

        let mut grouped: BTreeMap<i32, Vec<DateSpan>> = BTreeMap::new();
        for (advertiser_id, start, end) in rows {
            grouped
                .entry(advertiser_id)
                .or_default()
                .push(DateSpan::clamped(start, end));
        }

        Ok(grouped
            .into_iter()
            .map(|(advertiser_id, spans)| (advertiser_id, merge_spans(spans)))
            .collect())
    }
}
