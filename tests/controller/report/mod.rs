//! Tests for churn report endpoints.

mod get_churn;
mod get_monthly_churn_series;

use slotwarden::model::churn::{ChurnQuery, ChurnWindowDto, MonthlyChurnQuery};

use super::*;
