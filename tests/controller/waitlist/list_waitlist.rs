//! Tests for the list_waitlist endpoint.

use slotwarden::server::controller::waitlist::list_waitlist;

use super::*;

/// Tests paging through a main sponsorship waitlist.
///
/// Expected: 200 OK with the total and the newest subscribers on page one
#[tokio::test]
async fn pages_newest_first() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;
    let t0 = factory::at(2025, 3, 1, 8, 0);
    let main = SponsorshipType::MainSponsor.as_str();
    for (offset, email) in ["old@x.io", "mid@x.io", "new@x.io"].iter().enumerate() {
        test.waitlist()
            .insert_pending_entry(email, main, None, None, t0 + Duration::hours(offset as i64))
            .await?;
    }

    let query = WaitlistQuery {
        sponsorship_type: SponsorshipType::MainSponsor,
        type_id: None,
        page: Some(1),
        page_size: Some(2),
    };
    let resp = list_waitlist(State(test.into_app_state()), Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: WaitlistPageDto = read_json(resp).await;
    assert_eq!(body.total, 3);
    assert_eq!(body.page_size, 2);
    let emails: Vec<&str> = body.entries.iter().map(|e| e.email.as_str()).collect();
    assert_eq!(emails, vec!["new@x.io", "mid@x.io"]);

    Ok(())
}

/// Expected: 200 OK with defaults applied to a zero page and page size
#[tokio::test]
async fn clamps_invalid_paging() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;

    let query = WaitlistQuery {
        sponsorship_type: SponsorshipType::CategorySponsor,
        type_id: Some(3),
        page: Some(0),
        page_size: Some(0),
    };
    let resp = list_waitlist(State(test.into_app_state()), Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: WaitlistPageDto = read_json(resp).await;
    assert_eq!(body.total, 0);
    assert_eq!(body.page, 1);
    assert_eq!(body.page_size, 10);
    assert!(body.entries.is_empty());

    Ok(())
}
