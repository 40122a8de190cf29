//! Tests for the create_reservation endpoint.

use slotwarden::{
    model::sponsorship::CreateReservationDto,
    server::controller::sponsorship::create_reservation,
};

use super::*;

fn main_request() -> CreateReservationDto {
    CreateReservationDto {
        sponsorship_type: SponsorshipType::MainSponsor,
        type_id: None,
        detail: Some("entry 17".to_string()),
    }
}

/// Tests taking a hold in an open pool.
///
/// Expected: 201 Created with a token expiring after the configured TTL
#[tokio::test]
async fn creates_hold_when_slot_open() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;
    let before = Utc::now().naive_utc();

    let resp = create_reservation(State(test.into_app_state()), Json(main_request()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: ReservationDto = read_json(resp).await;
    assert_eq!(body.reservation_group, "MainSponsor-0");
    assert_eq!(body.detail.as_deref(), Some("entry 17"));
    assert!(body.expires_at >= before + Duration::minutes(15));

    Ok(())
}

/// Tests reserving once listings and holds fill the main pool.
///
/// Expected: 409 Conflict so the buyer can be offered the waitlist
#[tokio::test]
async fn conflict_when_pool_full() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;
    let now = Utc::now().naive_utc();
    let main = SponsorshipType::MainSponsor.as_str();
    test.sponsorship()
        .insert_active_listing(1, main, None, None, now)
        .await?;
    test.sponsorship()
        .insert_active_listing(2, main, None, None, now)
        .await?;
    test.sponsorship()
        .insert_reservation("MainSponsor-0", now + Duration::minutes(10))
        .await?;

    let resp = create_reservation(State(test.into_app_state()), Json(main_request()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
