//! Waitlist of buyers interested in a sponsorship scope that is currently full.
//!
//! Subscriptions are keyed by normalized email, tier and scope. At most one active row exists
//! per key; subscribing again only updates the linked directory entry and keeps the original
//! queue position.

#[cfg(test)]
mod tests;

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::waitlist::WaitlistRepository,
    error::{sponsorship::SponsorshipError, Error},
    model::{
        db::WaitlistEntryModel,
        tier::SponsorshipTier,
        waitlist::{PageRequest, ReminderMark, WaitlistPage},
    },
    service::retry::RetryContext,
};

/// Trims and lowercases a subscriber email.
pub fn normalize_email(email: &str) -> Result<String, SponsorshipError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() {
        return Err(SponsorshipError::InvalidEmail);
    }

    Ok(email)
}

/// Inserts or refreshes the active subscription for one tier using `db`.
async fn upsert_with<C: ConnectionTrait>(
    db: &C,
    email: &str,
    tier: SponsorshipTier,
    directory_entry_id: Option<i32>,
    now: NaiveDateTime,
) -> Result<WaitlistEntryModel, Error> {
    let waitlist_repo = WaitlistRepository::new(db);

    match waitlist_repo.find_active(email, tier).await? {
        Some(entry) if entry.directory_entry_id == directory_entry_id => Ok(entry),
        Some(entry) => Ok(waitlist_repo
            .update_directory_entry(entry, directory_entry_id, now)
            .await?),
        None => Ok(waitlist_repo
            .create(email, tier, directory_entry_id, now)
            .await?),
    }
}

pub struct WaitlistQueue<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WaitlistQueue<'a> {
    /// Creates a new instance of [`WaitlistQueue`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Subscribes `email` to openings in `tier`, stamped with the current time.
    pub async fn upsert(
        &self,
        email: &str,
        tier: SponsorshipTier,
        directory_entry_id: Option<i32>,
    ) -> Result<WaitlistEntryModel, Error> {
        self.upsert_at(email, tier, directory_entry_id, Utc::now().naive_utc())
            .await
    }

    /// Subscribes `email` to openings in `tier`.
    ///
    /// An existing active subscription keeps its `subscribed_at` and reminder state and only has
    /// its linked directory entry replaced.
    ///
    /// # Returns
    /// - `Ok(WaitlistEntryModel)` - The active subscription
    /// - `Err(SponsorshipError::InvalidEmail)` - Email is blank
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn upsert_at(
        &self,
        email: &str,
        tier: SponsorshipTier,
        directory_entry_id: Option<i32>,
        now: NaiveDateTime,
    ) -> Result<WaitlistEntryModel, Error> {
        let email = normalize_email(email)?;

        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!("waitlist subscribe for {} in {}", email, tier.group_key()),
            |_| {
                let db = db.clone();
                let email = email.clone();

                Box::pin(async move {
                    upsert_with(&db, &email, tier, directory_entry_id, now).await
                })
            },
        )
        .await
    }

    /// Subscribes `email` to each of `tiers` in one transaction, stamped with the current time.
    pub async fn upsert_many(
        &self,
        email: &str,
        directory_entry_id: Option<i32>,
        tiers: &[SponsorshipTier],
    ) -> Result<Vec<WaitlistEntryModel>, Error> {
        self.upsert_many_at(email, directory_entry_id, tiers, Utc::now().naive_utc())
            .await
    }

    /// Subscribes `email` to several tiers at once in a single transaction.
    ///
    /// Repeated tiers are collapsed; the result holds one entry per distinct tier in the order
    /// first given.
    pub async fn upsert_many_at(
        &self,
        email: &str,
        directory_entry_id: Option<i32>,
        tiers: &[SponsorshipTier],
        now: NaiveDateTime,
    ) -> Result<Vec<WaitlistEntryModel>, Error> {
        let email = normalize_email(email)?;

        let mut distinct: Vec<SponsorshipTier> = Vec::with_capacity(tiers.len());
        for tier in tiers {
            if !distinct.contains(tier) {
                distinct.push(*tier);
            }
        }

        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        let entries = ctx
            .execute_with_retry(&format!("waitlist subscribe for {}", email), |_| {
                let db = db.clone();
                let email = email.clone();
                let distinct = distinct.clone();

                Box::pin(async move {
                    let txn = db.begin().await?;

                    let mut entries = Vec::with_capacity(distinct.len());
                    for tier in distinct {
                        entries.push(
                            upsert_with(&txn, &email, tier, directory_entry_id, now).await?,
                        );
                    }

                    txn.commit().await?;

                    Ok(entries)
                })
            })
            .await?;

        tracing::debug!(
            "Waitlist subscription for {} covers {} scope(s)",
            email,
            entries.len()
        );

        Ok(entries)
    }

    /// Waiting subscribers in `tier` in notification order.
    ///
    /// Ordered by `subscribed_at`, then id, so earlier subscribers are always notified first.
    pub async fn get_pending_queue(
        &self,
        tier: SponsorshipTier,
    ) -> Result<Vec<WaitlistEntryModel>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("pending queue for {}", tier.group_key()), |_| {
            let db = db.clone();

            Box::pin(async move {
                let waitlist_repo = WaitlistRepository::new(&db);

                Ok(waitlist_repo.pending_queue(tier).await?)
            })
        })
        .await
    }

    /// Records that `sent_link` was emailed to the entry, stamped with the current time.
    pub async fn mark_reminder_sent(
        &self,
        entry_id: i32,
        sent_link: &str,
    ) -> Result<ReminderMark, Error> {
        self.mark_reminder_sent_at(entry_id, sent_link, Utc::now().naive_utc())
            .await
    }

    /// Records that the opening notification for `entry_id` was delivered.
    ///
    /// Calling this again for an entry that was already marked changes nothing.
    ///
    /// # Returns
    /// - `Ok(ReminderMark::Marked)` - Entry was waiting and is now marked
    /// - `Ok(ReminderMark::AlreadySent)` - Entry had already been marked
    /// - `Err(SponsorshipError::WaitlistEntryNotFound)` - No entry with this id
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn mark_reminder_sent_at(
        &self,
        entry_id: i32,
        sent_link: &str,
        now: NaiveDateTime,
    ) -> Result<ReminderMark, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();
        let sent_link = sent_link.to_string();

        ctx.execute_with_retry(&format!("mark waitlist entry {} notified", entry_id), |_| {
            let db = db.clone();
            let sent_link = sent_link.clone();

            Box::pin(async move {
                let waitlist_repo = WaitlistRepository::new(&db);

                let Some(entry) = waitlist_repo.find_by_id(entry_id).await? else {
                    return Err(SponsorshipError::WaitlistEntryNotFound(entry_id).into());
                };

                if entry.is_reminder_sent {
                    return Ok(ReminderMark::AlreadySent);
                }

                waitlist_repo
                    .mark_reminder_sent(entry, &sent_link, now)
                    .await?;

                Ok(ReminderMark::Marked)
            })
        })
        .await
    }

    /// Number of subscribers still waiting on `tier`.
    pub async fn count_waiting(&self, tier: SponsorshipTier) -> Result<u64, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("count waiting in {}", tier.group_key()), |_| {
            let db = db.clone();

            Box::pin(async move {
                let waitlist_repo = WaitlistRepository::new(&db);

                Ok(waitlist_repo.count_waiting(tier).await?)
            })
        })
        .await
    }

    /// The `take` most recent waiting subscribers in `tier`.
    pub async fn preview_waiting(
        &self,
        tier: SponsorshipTier,
        take: u64,
    ) -> Result<Vec<WaitlistEntryModel>, Error> {
        if take == 0 {
            return Ok(Vec::new());
        }

        let page = self.page(tier, PageRequest::new(Some(1), Some(take))).await?;

        Ok(page.entries)
    }

    /// One page of waiting subscribers in `tier`, newest first, with the total count.
    pub async fn page(
        &self,
        tier: SponsorshipTier,
        request: PageRequest,
    ) -> Result<WaitlistPage, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("list waiting in {}", tier.group_key()), |_| {
            let db = db.clone();

            Box::pin(async move {
                let waitlist_repo = WaitlistRepository::new(&db);

                let total = waitlist_repo.count_waiting(tier).await?;
                let entries = waitlist_repo
                    .list_waiting(tier, request.offset(), request.page_size)
                    .await?;

                Ok(WaitlistPage {
                    total,
                    request,
                    entries,
                })
            })
        })
        .await
    }
}
