//! Tests for InvoiceRepository::list_paid_spans method.

use super::*;

/// Tests that only paid invoices are returned.
///
/// Expected: Ok with the pending invoice excluded
#[tokio::test]
async fn returns_only_paid_invoices() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sponsorship_tables()
        .with_active_entries(2, 1, 1)
        .build()
        .await?;
    let main = SponsorshipType::MainSponsor.as_str();
    test.sponsorship()
        .insert_paid_invoice(
            1,
            main,
            None,
            None,
            factory::date(2025, 1, 1),
            factory::date(2025, 1, 31),
        )
        .await?;
    test.sponsorship()
        .insert_invoice(
            2,
            main,
            None,
            None,
            factory::date(2025, 1, 1),
            factory::date(2025, 1, 31),
            "Pending",
        )
        .await?;

    let repo = InvoiceRepository::new(&test.db);
    let spans = repo.list_paid_spans(&ChurnFilter::default()).await?;

    assert_eq!(
        spans,
        vec![(1, factory::date(2025, 1, 1), factory::date(2025, 1, 31))]
    );

    Ok(())
}

/// Tests filtering by sponsorship type and category.
///
/// Expected: Ok with only category 3 invoices returned
#[tokio::test]
async fn applies_filters() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sponsorship_tables()
        .with_active_entries(3, 3, 1)
        .build()
        .await?;
    let category = SponsorshipType::CategorySponsor.as_str();
    test.sponsorship()
        .insert_paid_invoice(
            1,
            category,
            Some(3),
            None,
            factory::date(2025, 1, 1),
            factory::date(2025, 1, 31),
        )
        .await?;
    test.sponsorship()
        .insert_paid_invoice(
            2,
            category,
            Some(4),
            None,
            factory::date(2025, 1, 1),
            factory::date(2025, 1, 31),
        )
        .await?;
    test.sponsorship()
        .insert_paid_invoice(
            3,
            SponsorshipType::MainSponsor.as_str(),
            None,
            None,
            factory::date(2025, 1, 1),
            factory::date(2025, 1, 31),
        )
        .await?;

    let repo = InvoiceRepository::new(&test.db);
    let spans = repo
        .list_paid_spans(&ChurnFilter {
            sponsorship_type: Some(SponsorshipType::CategorySponsor),
            category_id: Some(3),
            subcategory_id: None,
        })
        .await?;

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].0, 1);

    Ok(())
}
