use crate::server::{
    error::Error, mail::Mailer, scheduler::JobContext, service::notifier::OpeningNotifier,
};

/// Runs one opening notifier pass, returning the number of subscribers notified.
pub async fn notify_openings<M: Mailer>(context: JobContext<M>) -> Result<u64, Error> {
    let notifier = OpeningNotifier::new(
        &context.db,
        &context.policy,
        context.mailer.as_ref(),
        context.templates.as_ref(),
    );

    let summary = notifier.run().await?;

    Ok(summary.notified)
}
