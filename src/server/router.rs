//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/sponsorship/availability` - Slot usage and claimability for a scope
/// - `POST /api/sponsorship/reservations` - Take a checkout reservation hold
/// - `GET /api/sponsorship/reservations/{reservation_id}` - Look up an unexpired hold
/// - `POST /api/sponsorship/waitlist` - Subscribe to opening notifications
/// - `GET /api/sponsorship/waitlist` - Paged waiting subscribers for a scope
/// - `GET /api/reports/churn` - Advertiser churn over a day window
/// - `GET /api/reports/churn/monthly` - Monthly advertiser churn series
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, policy, reservation_ttl };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Slotwarden", description = "Sponsored listing capacity API"), tags(
        (name = controller::sponsorship::SPONSORSHIP_TAG, description = "Slot availability and reservation routes"),
        (name = controller::waitlist::WAITLIST_TAG, description = "Opening notification waitlist routes"),
        (name = controller::report::REPORT_TAG, description = "Advertiser churn report routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::sponsorship::get_availability))
        .routes(routes!(controller::sponsorship::create_reservation))
        .routes(routes!(controller::sponsorship::get_reservation))
        .routes(routes!(
            controller::waitlist::subscribe,
            controller::waitlist::list_waitlist
        ))
        .routes(routes!(controller::report::get_churn))
        .routes(routes!(controller::report::get_monthly_churn_series))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
