use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        sponsorship::{AvailabilityDto, CreateReservationDto, ReservationDto, ScopeQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, tier::SponsorshipTier},
        service::{capacity::availability::SlotAvailabilityService, reservation::ReservationLedger},
    },
};

pub static SPONSORSHIP_TAG: &str = "sponsorship";

/// Get slot usage and claimability for a sponsorship tier and scope
#[utoipa::path(
    get,
    path = "/api/sponsorship/availability",
    tag = SPONSORSHIP_TAG,
    params(ScopeQuery),
    responses(
        (status = 200, description = "Current slot usage for the scope", body = AvailabilityDto),
        (status = 400, description = "Scoped tier without a positive scope id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_availability(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> Result<impl IntoResponse, Error> {
    let tier = SponsorshipTier::new(query.sponsorship_type, query.type_id)?;
    let availability_service = SlotAvailabilityService::new(&state.db, &state.policy);

    let snapshot = availability_service.snapshot(tier).await?;

    Ok((StatusCode::OK, Json(AvailabilityDto::from(snapshot))))
}

/// Hold a slot for a buyer entering checkout
///
/// Returns 409 when the scope is full or lacks sellable inventory; the UI should offer the
/// waitlist instead.
#[utoipa::path(
    post,
    path = "/api/sponsorship/reservations",
    tag = SPONSORSHIP_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation hold created", body = ReservationDto),
        (status = 400, description = "Scoped tier without a positive scope id", body = ErrorDto),
        (status = 409, description = "No slot available in the scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(body): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, Error> {
    let tier = SponsorshipTier::new(body.sponsorship_type, body.type_id)?;
    let ledger = ReservationLedger::new(&state.db);

    let reservation = ledger
        .reserve(&state.policy, tier, state.reservation_ttl, body.detail)
        .await?;

    Ok((StatusCode::CREATED, Json(ReservationDto::from(reservation))))
}

/// Look up an unexpired reservation hold by its token
#[utoipa::path(
    get,
    path = "/api/sponsorship/reservations/{reservation_id}",
    tag = SPONSORSHIP_TAG,
    params(
        ("reservation_id" = String, Path, description = "Opaque reservation token")
    ),
    responses(
        (status = 200, description = "Reservation hold is still valid", body = ReservationDto),
        (status = 404, description = "Reservation unknown or expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(reservation_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let ledger = ReservationLedger::new(&state.db);

    let reservation = ledger.get_by_token(&reservation_id).await?;

    Ok((StatusCode::OK, Json(ReservationDto::from(reservation))))
}
