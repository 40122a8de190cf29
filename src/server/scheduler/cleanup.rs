use chrono::Utc;

use crate::server::{
    error::Error,
    scheduler::{config::reservation_cleanup::RETENTION, JobContext},
    service::reservation::ReservationLedger,
};

/// Deletes reservation holds that expired more than the retention window ago.
///
/// Expired holds already stop counting against capacity; this only keeps the table small.
pub async fn purge_expired_reservations<M>(context: JobContext<M>) -> Result<u64, Error> {
    let ledger = ReservationLedger::new(&context.db);
    let purged = ledger
        .purge_expired_at(RETENTION, Utc::now().naive_utc())
        .await?;

    if purged > 0 {
        tracing::info!("Deleted {} expired reservation hold(s)", purged);
    }

    Ok(purged)
}
