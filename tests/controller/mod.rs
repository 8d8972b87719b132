//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, against a mock translation API and an
//! in-memory database.

mod health;
mod translate;
mod translate_batch;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use vitrina::server::error::Error;
use vitrina_test_utils::prelude::*;

use crate::util::{json_body, TestSetupExt};

/// Translation API base URL on a port nothing listens on
const UNREACHABLE_TRANSLATE_API_URL: &str = "http://127.0.0.1:1";
