//! Tests for the get_churn endpoint.

use slotwarden::server::controller::report::get_churn;

use super::*;

/// Tests churn for a quarter where one of two advertisers stops paying.
///
/// Expected: 200 OK with one churned advertiser and a rate of 0.5
#[tokio::test]
async fn reports_cohort_churn() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;
    let main = SponsorshipType::MainSponsor.as_str();
    test.sponsorship()
        .insert_paid_invoice(
            1,
            main,
            None,
            None,
            factory::date(2024, 12, 1),
            factory::date(2025, 6, 30),
        )
        .await?;
    test.sponsorship()
        .insert_paid_invoice(
            2,
            main,
            None,
            None,
            factory::date(2024, 12, 1),
            factory::date(2025, 2, 10),
        )
        .await?;

    let query = ChurnQuery {
        start: factory::date(2025, 1, 1),
        end: factory::date(2025, 3, 31),
        sponsorship_type: None,
        category_id: None,
        subcategory_id: None,
    };
    let resp = get_churn(State(test.into_app_state()), Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: ChurnWindowDto = read_json(resp).await;
    assert_eq!(body.active_at_start, 2);
    assert_eq!(body.active_at_end, 1);
    assert_eq!(body.churned_from_start_cohort_ids, vec![2]);
    assert_eq!(body.churn_rate, 0.5);

    Ok(())
}

/// Expected: 400 Bad Request when the window ends on its first day
#[tokio::test]
async fn rejects_empty_window() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;

    let query = ChurnQuery {
        start: factory::date(2025, 1, 1),
        end: factory::date(2025, 1, 1),
        sponsorship_type: None,
        category_id: None,
        subcategory_id: None,
    };
    let resp = get_churn(State(test.into_app_state()), Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
