//! Mock endpoints of the translation API.
//!
//! Each endpoint matches a single text and target language, so several of them can be
//! registered on the same server. A request no endpoint matches gets mockito's 501 response,
//! which the client treats as a failed translation.

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{
    constant::{TEST_TRANSLATE_API_KEY, TEST_TRANSLATE_PATH},
    setup::TestSetup,
};

impl TestSetup {
    /// Create a mock endpoint translating `text` into `target_lang`.
    ///
    /// # Arguments
    /// - `text` - Text the request must carry in `q`
    /// - `target_lang` - Language the request must carry in `target`
    /// - `translated` - Text returned in the Google response envelope
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_translation_endpoint(
        &mut self,
        text: &str,
        target_lang: &str,
        translated: &str,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("POST", TEST_TRANSLATE_PATH)
            .match_query(Matcher::UrlEncoded(
                "key".into(),
                TEST_TRANSLATE_API_KEY.into(),
            ))
            .match_body(Matcher::PartialJson(json!({
                "q": text,
                "target": target_lang,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "data": {
                        "translations": [{ "translatedText": translated }]
                    }
                })
                .to_string(),
            )
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint answering translations of `text` with an error status.
    ///
    /// # Arguments
    /// - `text` - Text the request must carry in `q`
    /// - `status` - HTTP status code to respond with
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_failing_translation_endpoint(
        &mut self,
        text: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("POST", TEST_TRANSLATE_PATH)
            .match_query(Matcher::Any)
            .match_body(Matcher::PartialJson(json!({ "q": text })))
            .with_status(status)
            .with_body(json!({ "error": { "code": status, "message": "Backend Error" } }).to_string())
            .expect(expected_requests)
            .create()
    }
}
