use crate::server::service::retry::{DbErrClassifier, TransientClassifier};

use super::Error;

/// Strategy for handling errors in a retry context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (connectivity problems)
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // Unreachable server, dropped connection or pool timeout resolve on their own,
            // query errors and missing records will not
            Self::DbErr(db_err) => {
                if DbErrClassifier.is_transient(db_err) {
                    ErrorRetryStrategy::Retry
                } else {
                    ErrorRetryStrategy::Fail
                }
            }

            // Translation failures degrade to the original text instead of being retried
            Self::TranslateError(_) => ErrorRetryStrategy::Fail,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Parse errors - permanent failures (bad data format)
            Self::ParseError(_) => ErrorRetryStrategy::Fail,

            // Internal errors - permanent failures (bug in the server's code)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
