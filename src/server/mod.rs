//! Server application core modules.
//!
//! HTTP routing, configuration, the Google Cloud Translation client, database connectivity and
//! the retry executor guarding every database call.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
