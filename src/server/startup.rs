use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{
    server::{
        config::Config, error::Error, model::app::ServerTranslator,
        service::retry::RetryContext, service::translation::GoogleTranslateProvider,
    },
    translation::{TranslationCache, Translator},
};

/// Build the translator shared by every request, with an empty process-wide cache
pub fn build_translator(config: &Config) -> Result<ServerTranslator, Error> {
    let provider = GoogleTranslateProvider::new(
        &config.translate_api_url,
        &config.translate_api_key,
        config.translate_timeout,
    )?;

    let translator = Translator::new(provider, TranslationCache::unbounded())
        .with_source_lang(&config.translation_source_lang);

    Ok(translator)
}

/// Connect to the database, retrying while it is unreachable
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let database_url = config.database_url.as_str();

    RetryContext::new()
        .with_policy(config.db_retry)
        .execute_with_retry("database connection", || {
            let mut opt = ConnectOptions::new(database_url);
            opt.sqlx_logging(false);

            async move { Database::connect(opt).await.map_err(Error::from) }
        })
        .await
}
