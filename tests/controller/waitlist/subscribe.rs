//! Tests for the subscribe endpoint.

use slotwarden::server::{
    controller::waitlist::subscribe, model::tier::SponsorshipTier,
    service::waitlist::WaitlistQueue,
};

use super::*;

/// Tests subscribing one email to two scopes with a repeated entry.
///
/// Expected: 204 No Content and one normalized entry per distinct scope
#[tokio::test]
async fn subscribes_each_distinct_scope() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;
    let category = WaitlistScopeDto {
        sponsorship_type: SponsorshipType::CategorySponsor,
        type_id: Some(8),
    };
    let body = SubscribeDto {
        email: "  Buyer@Example.COM ".to_string(),
        directory_entry_id: Some(31),
        scopes: vec![
            category,
            WaitlistScopeDto {
                sponsorship_type: SponsorshipType::MainSponsor,
                type_id: None,
            },
            category,
        ],
    };

    let resp = subscribe(State(test.into_app_state()), Json(body))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let queue = WaitlistQueue::new(&test.db);
    let pending = queue
        .get_pending_queue(SponsorshipTier::Category(8))
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].email, "buyer@example.com");
    assert_eq!(pending[0].directory_entry_id, Some(31));
    assert_eq!(queue.count_waiting(SponsorshipTier::Main).await.unwrap(), 1);

    Ok(())
}

/// Expected: 400 Bad Request and nothing stored for a blank email
#[tokio::test]
async fn rejects_blank_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;
    let body = SubscribeDto {
        email: "   ".to_string(),
        directory_entry_id: None,
        scopes: vec![WaitlistScopeDto {
            sponsorship_type: SponsorshipType::MainSponsor,
            type_id: None,
        }],
    };

    let resp = subscribe(State(test.into_app_state()), Json(body))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let queue = WaitlistQueue::new(&test.db);
    assert_eq!(queue.count_waiting(SponsorshipTier::Main).await.unwrap(), 0);

    Ok(())
}

/// Expected: 400 Bad Request when any scope lacks a positive id
#[tokio::test]
async fn rejects_invalid_scope() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;
    let body = SubscribeDto {
        email: "buyer@example.com".to_string(),
        directory_entry_id: None,
        scopes: vec![WaitlistScopeDto {
            sponsorship_type: SponsorshipType::SubcategorySponsor,
            type_id: Some(0),
        }],
    };

    let resp = subscribe(State(test.into_app_state()), Json(body))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
