use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        waitlist::{SubscribeDto, WaitlistPageDto, WaitlistQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, tier::SponsorshipTier, waitlist::PageRequest},
        service::waitlist::WaitlistQueue,
    },
};

pub static WAITLIST_TAG: &str = "waitlist";

/// Subscribe an email to opening notifications for one or more scopes
///
/// Subscribing again to a scope keeps the original queue position.
#[utoipa::path(
    post,
    path = "/api/sponsorship/waitlist",
    tag = WAITLIST_TAG,
    request_body = SubscribeDto,
    responses(
        (status = 204, description = "Subscriptions recorded"),
        (status = 400, description = "Blank email or invalid scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    Json(body): Json<SubscribeDto>,
) -> Result<impl IntoResponse, Error> {
    let tiers = body
        .scopes
        .iter()
        .map(|scope| SponsorshipTier::new(scope.sponsorship_type, scope.type_id))
        .collect::<Result<Vec<_>, _>>()?;

    let waitlist_queue = WaitlistQueue::new(&state.db);
    waitlist_queue
        .upsert_many(&body.email, body.directory_entry_id, &tiers)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List subscribers waiting on a scope, newest first
#[utoipa::path(
    get,
    path = "/api/sponsorship/waitlist",
    tag = WAITLIST_TAG,
    params(WaitlistQuery),
    responses(
        (status = 200, description = "One page of waiting subscribers", body = WaitlistPageDto),
        (status = 400, description = "Scoped tier without a positive scope id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_waitlist(
    State(state): State<AppState>,
    Query(query): Query<WaitlistQuery>,
) -> Result<impl IntoResponse, Error> {
    let tier = SponsorshipTier::new(query.sponsorship_type, query.type_id)?;
    let waitlist_queue = WaitlistQueue::new(&state.db);

    let page = waitlist_queue
        .page(tier, PageRequest::new(query.page, query.page_size))
        .await?;

    Ok((StatusCode::OK, Json(WaitlistPageDto::from(page))))
}
