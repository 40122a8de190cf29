//! Tests for the get_monthly_churn_series endpoint.

use slotwarden::server::controller::report::get_monthly_churn_series;

use super::*;

/// Expected: 200 OK with one window per month, stopping before the end month
#[tokio::test]
async fn returns_one_window_per_month() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;
    test.sponsorship()
        .insert_paid_invoice(
            4,
            SponsorshipType::CategorySponsor.as_str(),
            Some(2),
            None,
            factory::date(2025, 1, 15),
            factory::date(2025, 2, 14),
        )
        .await?;

    let query = MonthlyChurnQuery {
        start_month: factory::date(2025, 1, 20),
        end_month: factory::date(2025, 4, 1),
        sponsorship_type: Some(SponsorshipType::CategorySponsor),
        category_id: Some(2),
        subcategory_id: None,
    };
    let resp = get_monthly_churn_series(State(test.into_app_state()), Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<ChurnWindowDto> = read_json(resp).await;
    let starts: Vec<_> = body.iter().map(|w| w.window_start).collect();
    assert_eq!(
        starts,
        vec![
            factory::date(2025, 1, 1),
            factory::date(2025, 2, 1),
            factory::date(2025, 3, 1)
        ]
    );
    assert_eq!(body[0].activated_ids, vec![4]);
    assert_eq!(body[1].gross_churned_ids, vec![4]);

    Ok(())
}

/// Expected: 400 Bad Request when the end month precedes the start month
#[tokio::test]
async fn rejects_reversed_range() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sponsorship_tables().build().await?;

    let query = MonthlyChurnQuery {
        start_month: factory::date(2025, 5, 1),
        end_month: factory::date(2025, 2, 1),
        sponsorship_type: None,
        category_id: None,
        subcategory_id: None,
    };
    let resp = get_monthly_churn_series(State(test.into_app_state()), Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
