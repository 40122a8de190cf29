//! Tests for the get_reservation endpoint.

use axum::extract::Path;
use slotwarden::server::controller::sponsorship::get_reservation;

use super::*;

/// Expected: 200 OK with the stored hold
#[tokio::test]
async fn returns_unexpired_hold() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;
    let hold = test
        .sponsorship()
        .insert_reservation("CategorySponsor-4", Utc::now().naive_utc() + Duration::minutes(5))
        .await?;

    let resp = get_reservation(
        State(test.into_app_state()),
        Path(hold.reservation_id.clone()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: ReservationDto = read_json(resp).await;
    assert_eq!(body.reservation_id, hold.reservation_id);
    assert_eq!(body.reservation_group, "CategorySponsor-4");

    Ok(())
}

/// Expected: 404 Not Found once the hold has expired
#[tokio::test]
async fn expired_hold_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;
    let hold = test
        .sponsorship()
        .insert_reservation("MainSponsor-0", Utc::now().naive_utc() - Duration::minutes(1))
        .await?;

    let resp = get_reservation(State(test.into_app_state()), Path(hold.reservation_id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expected: 404 Not Found for a token that was never issued
#[tokio::test]
async fn unknown_token_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;

    let resp = get_reservation(
        State(test.into_app_state()),
        Path("not-a-token".to_string()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
