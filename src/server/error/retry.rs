use sea_orm::DbErr;

use super::{mail::MailError, Error};

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures)
    Retry,
    /// Failed permanently (bad request or programming error)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => {
                match db_err {
                    // Connection acquisition errors - transient, should retry
                    DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                    // Connection errors - transient, should retry
                    DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                    // Query, constraint, conversion and record errors won't resolve with retry
                    _ => ErrorRetryStrategy::Fail,
                }
            }

            // SMTP connection drops and temporary rejections
            Self::MailError(MailError::Transport(err)) if err.is_transient() => {
                ErrorRetryStrategy::Retry
            }
            Self::MailError(_) => ErrorRetryStrategy::Fail,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Validation, not-found and conflict outcomes are answers, not faults
            Self::SponsorshipError(_) => ErrorRetryStrategy::Fail,
            Self::ChurnError(_) => ErrorRetryStrategy::Fail,

            // Job scheduler errors - permanent failures (configuration issue)
            Self::SchedulerError(_) => ErrorRetryStrategy::Fail,
            Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
