use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        churn::{ChurnQuery, ChurnWindowDto, MonthlyChurnQuery},
    },
    server::{
        error::Error, model::app::AppState, model::churn::ChurnFilter,
        service::churn::ChurnAnalyticsEngine,
    },
};

pub static REPORT_TAG: &str = "report";

/// Get advertiser churn over an inclusive day window
#[utoipa::path(
    get,
    path = "/api/reports/churn",
    tag = REPORT_TAG,
    params(ChurnQuery),
    responses(
        (status = 200, description = "Churn figures for the window", body = ChurnWindowDto),
        (status = 400, description = "Window end is not after its start", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_churn(
    State(state): State<AppState>,
    Query(query): Query<ChurnQuery>,
) -> Result<impl IntoResponse, Error> {
    let filter = ChurnFilter {
        sponsorship_type: query.sponsorship_type,
        category_id: query.category_id,
        subcategory_id: query.subcategory_id,
    };
    let churn_engine = ChurnAnalyticsEngine::new(&state.db);

    let result = churn_engine.get_churn(query.start, query.end, filter).await?;

    Ok((StatusCode::OK, Json(ChurnWindowDto::from(result))))
}

/// Get advertiser churn for each calendar month in a range
#[utoipa::path(
    get,
    path = "/api/reports/churn/monthly",
    tag = REPORT_TAG,
    params(MonthlyChurnQuery),
    responses(
        (status = 200, description = "One churn window per month", body = Vec<ChurnWindowDto>),
        (status = 400, description = "End month is not after start month", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_monthly_churn_series(
    State(state): State<AppState>,
    Query(query): Query<MonthlyChurnQuery>,
) -> Result<impl IntoResponse, Error> {
    let filter = ChurnFilter {
        sponsorship_type: query.sponsorship_type,
        category_id: query.category_id,
        subcategory_id: query.subcategory_id,
    };
    let churn_engine = ChurnAnalyticsEngine::new(&state.db);

    let series = churn_engine
        .get_monthly_series(query.start_month, query.end_month, filter)
        .await?;

    let series: Vec<ChurnWindowDto> = series.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(series)))
}
