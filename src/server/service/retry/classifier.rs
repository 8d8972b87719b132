//! Classification of failures into transient (worth retrying) and permanent.

use std::fmt::Display;

use sea_orm::DbErr;

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Message fragments that mark an error as a transient connectivity problem.
pub const TRANSIENT_MESSAGE_MARKERS: [&str; 3] =
    ["Can't reach database", "timed out", "Connection terminated"];

/// Decides whether a failed attempt may succeed if tried again.
pub trait TransientClassifier<E> {
    fn is_transient(&self, error: &E) -> bool;
}

/// Returns true when `message` contains one of [`TRANSIENT_MESSAGE_MARKERS`].
pub fn has_transient_message(message: &str) -> bool {
    TRANSIENT_MESSAGE_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}

/// Classifies any displayable error by its message alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct MessageClassifier;

impl<E: Display> TransientClassifier<E> for MessageClassifier {
    fn is_transient(&self, error: &E) -> bool {
        has_transient_message(&error.to_string())
    }
}

/// Classifies database errors by kind, falling back to the message for everything else.
#[derive(Clone, Copy, Debug, Default)]
pub struct DbErrClassifier;

impl TransientClassifier<DbErr> for DbErrClassifier {
    fn is_transient(&self, error: &DbErr) -> bool {
        match error {
            // Database server unreachable or connection dropped mid-query
            DbErr::Conn(_) => true,
            // Pool timed out handing out a connection, or the connection was closed
            DbErr::ConnectionAcquire(_) => true,
            other => has_transient_message(&other.to_string()),
        }
    }
}

impl TransientClassifier<Error> for DbErrClassifier {
    fn is_transient(&self, error: &Error) -> bool {
        matches!(error.to_retry_strategy(), ErrorRetryStrategy::Retry)
    }
}
