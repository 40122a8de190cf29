//! Scheduler for periodic sponsorship maintenance jobs.
//!
//! This module provides a cron-based job scheduler running the opening notifier, which emails
//! waitlisted buyers when a scope has a free slot, and the reservation cleanup, which deletes
//! long-expired holds. A job never overlaps itself: a tick arriving while the previous run is
//! still in progress is skipped.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::Error, mail::Mailer, service::capacity::policy::CapacityPolicy,
    util::template::NotificationTemplates,
};

pub mod cleanup;
pub mod config;
pub mod opening;

#[cfg(test)]
mod tests;

use self::{cleanup::purge_expired_reservations, opening::notify_openings};

/// Dependencies handed to every scheduled job run.
pub struct JobContext<M> {
    pub db: DatabaseConnection,
    pub policy: CapacityPolicy,
    pub mailer: Arc<M>,
    pub templates: Arc<NotificationTemplates>,
}

impl<M> Clone for JobContext<M> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            policy: self.policy,
            mailer: Arc::clone(&self.mailer),
            templates: Arc::clone(&self.templates),
        }
    }
}

/// Job scheduler for managing background sponsorship tasks.
pub struct Scheduler<M> {
    context: JobContext<M>,
    opening_notifier_cron: String,
    sched: JobScheduler,
}

impl<M: Mailer + 'static> Scheduler<M> {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Arguments
    /// - `context` - Database, capacity policy, mailer and templates shared by all jobs
    /// - `opening_notifier_cron` - Cron expression for the opening notifier
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(
        context: JobContext<M>,
        opening_notifier_cron: impl Into<String>,
    ) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;

        Ok(Self {
            context,
            opening_notifier_cron: opening_notifier_cron.into(),
            sched,
        })
    }

    /// Registers all scheduled jobs and starts the scheduler.
    ///
    /// The following jobs are registered:
    /// - Opening notifications for waitlisted buyers
    /// - Expired reservation cleanup
    ///
    /// # Returns
    /// - `Ok(())` - All jobs successfully registered and scheduler started
    /// - `Err(Error)` - Failed to register a job or start the scheduler
    pub async fn start(mut self) -> Result<(), Error> {
        let opening_notifier_cron = self.opening_notifier_cron.clone();

        self.schedule_job(
            &opening_notifier_cron,
            "opening notification",
            notify_openings::<M>,
        )
        .await?;

        self.schedule_job(
            config::reservation_cleanup::CRON_EXPRESSION,
            "expired reservation cleanup",
            purge_expired_reservations::<M>,
        )
        .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// The function receives a clone of the job context on every run and returns the number of
    /// items it processed. Runs of the same job are serialized with a try-lock; a tick that
    /// finds the previous run still holding the lock is skipped.
    ///
    /// # Arguments
    /// - `cron` - Cron expression defining when the job should run (e.g., "0 0 * * * *" for hourly)
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async job body returning the count of processed items
    ///
    /// # Returns
    /// - `Ok(())` - Job successfully registered with the scheduler
    /// - `Err(Error)` - Failed to create or add the job (invalid cron expression or scheduler error)
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(JobContext<M>) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<u64, Error>> + Send + 'static,
    {
        let context = self.context.clone();
        let name = name.to_string();
        let function = Arc::new(function);
        let running = Arc::new(Mutex::new(()));

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let context = context.clone();
                let name = name.clone();
                let function = Arc::clone(&function);
                let running = Arc::clone(&running);

                Box::pin(async move {
                    let Ok(_guard) = running.try_lock() else {
                        tracing::warn!("Skipping {} run, previous run still in progress", name);
                        return;
                    };

                    match function(context).await {
                        Ok(count) => tracing::debug!("Completed {} run, {} item(s)", name, count),
                        Err(e) => tracing::error!("Error running {} job: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
