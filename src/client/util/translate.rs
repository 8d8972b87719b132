#[cfg(feature = "web")]
use std::rc::Rc;

#[cfg(feature = "web")]
use vitrina::{
    model::translation::{TranslateRequestDto, TranslateResponseDto},
    translation::{TranslateError, TranslationCache, TranslationProvider, Translator},
};

/// Translates through the server's `/api/translate` endpoint
#[cfg(feature = "web")]
pub struct ApiTranslationProvider;

#[cfg(feature = "web")]
impl TranslationProvider for ApiTranslationProvider {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        _source_lang: Option<&str>,
    ) -> Result<String, TranslateError> {
        use reqwasm::http::Request;

        let body = serde_json::to_string(&TranslateRequestDto {
            text: Some(text.to_string()),
            target_lang: Some(target_lang.to_string()),
        })
        .map_err(|e| TranslateError::Request(format!("Failed to encode request: {}", e)))?;

        let response = Request::post("/api/translate")
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| TranslateError::Request(format!("Failed to send request: {}", e)))?;

        if response.status() != 200 {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(TranslateError::Status {
                status: response.status(),
                body,
            });
        }

        let translation = response
            .json::<TranslateResponseDto>()
            .await
            .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;

        // The server already fell back to the original text; report it so it is not cached
        if let Some(error) = translation.error {
            return Err(TranslateError::Request(error));
        }

        Ok(translation.translated_text)
    }
}

/// Browser-side translator shared through the component context
#[cfg(feature = "web")]
#[derive(Clone)]
pub struct ClientTranslator(Rc<Translator<ApiTranslationProvider>>);

#[cfg(feature = "web")]
impl ClientTranslator {
    pub fn new() -> Self {
        Self(Rc::new(Translator::new(
            ApiTranslationProvider,
            TranslationCache::unbounded(),
        )))
    }

    pub async fn translate(&self, text: &str, target_lang: &str) -> String {
        self.0.translate(text, target_lang).await
    }
}
