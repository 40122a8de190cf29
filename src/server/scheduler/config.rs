use chrono::Duration;

pub mod opening_notifier {
    /// Default cron expression for the opening notifier
    /// Runs every 15 minutes on the minute (00:00, 00:15, 00:30, etc.)
    pub const CRON_EXPRESSION: &str = "0 */15 * * * *";
}

pub mod reservation_cleanup {
    use super::*;

    /// Expired holds are kept this long before deletion
    pub const RETENTION: Duration = Duration::days(1);

    /// Cron expression for expired reservation cleanup
    /// Runs hourly at the top of the hour
    pub const CRON_EXPRESSION: &str = "0 0 * * * *";
}
