//! Tests for the get_availability endpoint.

use slotwarden::server::controller::sponsorship::get_availability;

use super::*;

/// Tests an empty main sponsorship pool.
///
/// Expected: 200 OK with every main slot free and no inventory gate
#[tokio::test]
async fn reports_open_main_pool() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;

    let query = ScopeQuery {
        sponsorship_type: SponsorshipType::MainSponsor,
        type_id: None,
    };
    let resp = get_availability(State(test.into_app_state()), Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: AvailabilityDto = read_json(resp).await;
    assert_eq!(body.max_slots, 3);
    assert_eq!(body.active_listings, 0);
    assert_eq!(body.min_inventory, None);
    assert!(body.can_claim);

    Ok(())
}

/// Tests a category with too few sellable directory entries.
///
/// Expected: 200 OK with can_claim false despite free slots
#[tokio::test]
async fn thin_category_is_not_claimable() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sponsorship_tables()
        .with_active_entries(4, 5, 50)
        .build()
        .await?;

    let query = ScopeQuery {
        sponsorship_type: SponsorshipType::CategorySponsor,
        type_id: Some(5),
    };
    let resp = get_availability(State(test.into_app_state()), Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: AvailabilityDto = read_json(resp).await;
    assert_eq!(body.sellable_entries, Some(4));
    assert!(!body.can_claim);

    Ok(())
}

/// Tests a category query without a scope id.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn rejects_category_without_scope() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;

    let query = ScopeQuery {
        sponsorship_type: SponsorshipType::CategorySponsor,
        type_id: None,
    };
    let resp = get_availability(State(test.into_app_state()), Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
