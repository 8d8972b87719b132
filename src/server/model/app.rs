use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    server::service::{retry::RetryPolicy, translation::GoogleTranslateProvider},
    translation::Translator,
};

/// Translator used by the server, backed by the Google Cloud Translation API.
pub type ServerTranslator = Translator<GoogleTranslateProvider>;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub translator: Arc<ServerTranslator>,
    pub retry_policy: RetryPolicy,
}
