//! Google Cloud Translation (v2) client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::translation::{TranslateError, TranslationProvider};

/// Production endpoint of the translation API.
pub const DEFAULT_TRANSLATE_API_URL: &str = "https://translation.googleapis.com";

/// Path of the v2 translate method, relative to the API base URL.
pub const TRANSLATE_PATH: &str = "/language/translate/v2";

#[derive(Serialize)]
struct TranslateRequestBody<'a> {
    q: &'a str,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    format: &'static str,
}

#[derive(Deserialize)]
struct TranslateResponseBody {
    data: TranslateResponseData,
}

#[derive(Deserialize)]
struct TranslateResponseData {
    translations: Vec<TranslatedEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatedEntry {
    translated_text: String,
}

/// [`TranslationProvider`] backed by the Google Cloud Translation REST API.
///
/// Cloning shares the underlying HTTP connection pool.
#[derive(Clone, Debug)]
pub struct GoogleTranslateProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GoogleTranslateProvider {
    /// Creates a client for the API at `base_url`.
    ///
    /// # Arguments
    /// - `base_url` - API base URL, [`DEFAULT_TRANSLATE_API_URL`] in production
    /// - `api_key` - Key sent as the `key` query parameter
    /// - `timeout` - Upper bound for a single request, including reading the body
    ///
    /// # Returns
    /// - `Ok(GoogleTranslateProvider)` - Client ready to use
    /// - `Err(TranslateError::Reqwest)` - The HTTP client could not be built
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), TRANSLATE_PATH)
    }
}

impl TranslationProvider for GoogleTranslateProvider {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: Option<&str>,
    ) -> Result<String, TranslateError> {
        let body = TranslateRequestBody {
            q: text,
            target: target_lang,
            source: source_lang,
            format: "text",
        };

        // Request errors render their URL, which carries the key.
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(TranslateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: TranslateResponseBody = response
            .json()
            .await
            .map_err(|e| TranslateError::MalformedResponse(e.without_url().to_string()))?;

        body.data
            .translations
            .into_iter()
            .next()
            .map(|entry| entry.translated_text)
            .ok_or_else(|| {
                TranslateError::MalformedResponse("response contained no translations".to_string())
            })
    }
}
