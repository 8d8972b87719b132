//! Vitrina: the shared core of the real-estate listing site.
//!
//! The crate is split into pieces that compile for every target and pieces that only make
//! sense on the back end:
//!
//! - [`model`] - DTOs shared between the web client and the HTTP API
//! - [`translation`] - memoizing translation layer with original-text fallback, used by both the
//!   server (explicit source language) and the web client (fixed source language)
//! - `server` - axum back end: configuration, retry executor for persistence calls, translation
//!   provider, controllers and router (behind the `server` feature)

pub mod model;
pub mod translation;

#[cfg(feature = "server")]
pub mod server;
