//! Batch job notifying waitlisted buyers when a scope has an open slot.
//!
//! Each run walks the sponsorship types in order (main, category, subcategory), checks every
//! scope that has waiting subscribers and, where a slot can be claimed, emails the whole
//! waiting queue in subscription order. An entry is only marked once its email was accepted by
//! the transport, so failed deliveries are retried on the next run.


use chrono::{NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::sponsorship::SponsorshipType,
    server::{
        data::{directory_entry::DirectoryEntryRepository, waitlist::WaitlistRepository},
        error::Error,
        mail::Mailer,
        model::{db::WaitlistEntryModel, tier::SponsorshipTier, waitlist::ReminderMark},
        service::{
            capacity::{availability::SlotAvailabilityService, policy::CapacityPolicy},
            retry::RetryContext,
            waitlist::WaitlistQueue,
        },
        util::template::NotificationTemplates,
    },
};

/// Counts from one notifier run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotifierSummary {
    /// Scopes with waiting subscribers that were checked
    pub scopes_checked: u64,
    /// Checked scopes that had a claimable slot
    pub scopes_open: u64,
    /// Subscribers emailed and marked
    pub notified: u64,
    /// Subscribers left waiting because delivery or marking failed
    pub failed: u64,
}

pub struct OpeningNotifier<'a, M: Mailer> {
    db: &'a DatabaseConnection,
    policy: &'a CapacityPolicy,
    mailer: &'a M,
    templates: &'a NotificationTemplates,
}

impl<'a, M: Mailer> OpeningNotifier<'a, M> {
    /// Creates a new instance of [`OpeningNotifier`]
    pub fn new(
        db: &'a DatabaseConnection,
        policy: &'a CapacityPolicy,
        mailer: &'a M,
        templates: &'a NotificationTemplates,
    ) -> Self {
        Self {
            db,
            policy,
            mailer,
            templates,
        }
    }

    /// Runs one notification pass as of now.
    pub async fn run(&self) -> Result<NotifierSummary, Error> {
        self.run_at(Utc::now().naive_utc()).await
    }

    /// Runs one notification pass at `now`.
    ///
    /// Failures while checking one scope or notifying one subscriber are logged and skipped;
    /// only a failure to list the scopes with waiting subscribers aborts the run.
    pub async fn run_at(&self, now: NaiveDateTime) -> Result<NotifierSummary, Error> {
        let mut summary = NotifierSummary::default();

        for kind in SponsorshipType::ALL {
            for scope in self.pending_scopes(kind).await? {
                let tier = match SponsorshipTier::new(kind, scope) {
                    Ok(tier) => tier,
                    Err(e) => {
                        tracing::warn!("Skipping waitlist rows with unusable scope: {}", e);
                        continue;
                    }
                };

                summary.scopes_checked += 1;
                if let Err(e) = self.notify_scope(tier, now, &mut summary).await {
                    tracing::error!(
                        "Failed to process waitlist for {}: {}",
                        tier.group_key(),
                        e
                    );
                }
            }
        }

        tracing::info!(
            "Opening notifier checked {} scope(s), {} open, notified {}, {} failed",
            summary.scopes_checked,
            summary.scopes_open,
            summary.notified,
            summary.failed
        );

        Ok(summary)
    }

    async fn pending_scopes(&self, kind: SponsorshipType) -> Result<Vec<Option<i32>>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("pending {} waitlist scopes", kind), |_| {
            let db = db.clone();

            Box::pin(async move {
                let waitlist_repo = WaitlistRepository::new(&db);

                Ok(waitlist_repo.pending_scopes(kind).await?)
            })
        })
        .await
    }

    async fn notify_scope(
        &self,
        tier: SponsorshipTier,
        now: NaiveDateTime,
        summary: &mut NotifierSummary,
    ) -> Result<(), Error> {
        let availability = SlotAvailabilityService::new(self.db, self.policy);
        if !availability.can_claim_at(tier, now).await? {
            tracing::debug!("No opening in {}, waitlist left as is", tier.group_key());
            return Ok(());
        }
        summary.scopes_open += 1;

        let queue = WaitlistQueue::new(self.db);
        for entry in queue.get_pending_queue(tier).await? {
            let entry_id = entry.id;
            match self.notify_entry(&queue, tier, entry, now).await {
                Ok(()) => summary.notified += 1,
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!(
                        "Failed to notify waitlist entry {} in {}: {}",
                        entry_id,
                        tier.group_key(),
                        e
                    );
                }
            }
        }

        Ok(())
    }

    async fn notify_entry(
        &self,
        queue: &WaitlistQueue<'_>,
        tier: SponsorshipTier,
        entry: WaitlistEntryModel,
        now: NaiveDateTime,
    ) -> Result<(), Error> {
        let entry_is_active = match entry.directory_entry_id {
            Some(id) => DirectoryEntryRepository::new(self.db).is_active(id).await?,
            None => false,
        };

        let link = self
            .templates
            .link_for(tier, entry.directory_entry_id, entry_is_active);
        let email = self.templates.render_email(&entry.email, tier, &link);

        self.mailer.send(email).await?;

        if queue.mark_reminder_sent_at(entry.id, &link, now).await? == ReminderMark::AlreadySent {
            tracing::debug!("Waitlist entry {} was already marked", entry.id);
        }

        Ok(())
    }
}
