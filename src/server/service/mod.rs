//! Service layer for the listing server.
//!
//! Services wrap external systems: the Google Cloud Translation API behind the
//! [`TranslationProvider`](crate::translation::TranslationProvider) seam, the database health
//! check, and the retry executor used for every persistence call.

pub mod health;
pub mod retry;
pub mod translation;
