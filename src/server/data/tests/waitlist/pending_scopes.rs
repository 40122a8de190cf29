//! Tests for WaitlistRepository::pending_scopes method.

use super::*;

/// Tests that each scope with waiting subscribers is returned once.
///
/// Expected: Ok with distinct scope ids for the requested type only
#[tokio::test]
async fn returns_distinct_scopes_for_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SponsoredListingOpeningNotification)
        .build()
        .await?;
    let subcategory = SponsorshipType::SubcategorySponsor.as_str();
    let now = factory::at(2025, 1, 1, 9, 0);
    for (email, scope) in [("a@x.io", 7), ("b@x.io", 7), ("c@x.io", 2)] {
        test.waitlist()
            .insert_pending_entry(email, subcategory, Some(scope), None, now)
            .await?;
    }
    test.waitlist()
        .insert_pending_entry(
            "d@x.io",
            SponsorshipType::CategorySponsor.as_str(),
            Some(9),
            None,
            now,
        )
        .await?;

    let repo = WaitlistRepository::new(&test.db);
    let scopes = repo
        .pending_scopes(SponsorshipType::SubcategorySponsor)
        .await?;

    assert_eq!(scopes, vec![Some(2), Some(7)]);

    Ok(())
}
