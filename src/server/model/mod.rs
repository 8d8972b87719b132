//! Server-side models.

pub mod app;
