
use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use slotwarden_test_utils::prelude::*;

use crate::{
    model::sponsorship::SponsorshipType,
    server::{
        error::mail::MailError,
        mail::{Mailer, OutgoingEmail},
        model::tier::SponsorshipTier,
        scheduler::{JobContext, Scheduler},
        service::capacity::policy::CapacityPolicy,
        util::template::NotificationTemplates,
    },
};

/// Mailer collecting recipients of every email sent by a job.
#[derive(Default)]
struct CollectingMailer {
    recipients: Mutex<Vec<String>>,
}

impl Mailer for CollectingMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        self.recipients.lock().unwrap().push(email.to);

        Ok(())
    }
}

fn job_context(test: &TestContext) -> JobContext<CollectingMailer> {
    JobContext {
        db: test.db.clone(),
        policy: CapacityPolicy::default(),
        mailer: Arc::new(CollectingMailer::default()),
        templates: Arc::new(NotificationTemplates::new(
            "https://dir.example/buy/[SPONSORSHIP_TYPE]?entry=[DIRECTORY_ENTRY_ID]",
            "https://dir.example/advertise/[SPONSORSHIP_TYPE]",
        )),
    }
}
