use dioxus_logger::tracing;
use futures::future::join_all;
use serde_json::Value;

use crate::translation::{
    cache::TranslationCache,
    provider::{TranslateError, TranslationProvider},
};

/// Language listing content is authored in.
pub const DEFAULT_SOURCE_LANG: &str = "ro";

/// Text-bearing fields of a property listing that are translated as plain strings.
pub const PROPERTY_TEXT_FIELDS: [&str; 5] = ["name", "description", "street", "zone", "locality"];

/// Property listing field holding a JSON-encoded array of feature labels.
pub const PROPERTY_FEATURES_FIELD: &str = "features";

/// Result of translating one string with failure reporting.
///
/// `text` is always usable: it holds the translation on success and the original text when the
/// provider failed.
#[derive(Debug)]
pub struct TranslationOutcome {
    pub text: String,
    pub error: Option<TranslateError>,
}

impl TranslationOutcome {
    /// Whether the text fell back to the original because the provider failed.
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// Caching, falling-back front for a [`TranslationProvider`].
///
/// # Contract
/// - Translating into the source language returns the text as is, without touching the cache
///   or the provider
/// - Empty or whitespace-only text is returned as is
/// - A cached translation is returned without calling the provider
/// - A successful provider response is cached, then returned
/// - A provider failure is logged and the original text is returned; the non-`try_` methods
///   never fail
pub struct Translator<P> {
    provider: P,
    cache: TranslationCache,
    source_lang: String,
}

impl<P> Translator<P>
where
    P: TranslationProvider,
{
    /// Creates a translator over `provider` memoizing into `cache`.
    ///
    /// The source language defaults to [`DEFAULT_SOURCE_LANG`].
    pub fn new(provider: P, cache: TranslationCache) -> Self {
        Self {
            provider,
            cache,
            source_lang: DEFAULT_SOURCE_LANG.to_string(),
        }
    }

    /// Overrides the language content is authored in.
    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = source_lang.into();
        self
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Translates `text` from the translator's fixed source language into `target_lang`.
    ///
    /// The provider is left to detect the source language and the cache key is `text_target`.
    /// Falls back to the original text on provider failure.
    pub async fn translate(&self, text: &str, target_lang: &str) -> String {
        self.translate_outcome(text, target_lang).await.text
    }

    /// Same as [`Translator::translate`] but reports provider failures.
    ///
    /// # Returns
    /// - `Ok(String)` - Translated, cached or short-circuited text
    /// - `Err(TranslateError)` - The provider failed; nothing was cached
    pub async fn try_translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError> {
        if target_lang == self.source_lang {
            return Ok(text.to_string());
        }

        self.cached_or_fetch(text, target_lang, None).await
    }

    /// Same as [`Translator::translate`] but returns the failure alongside the fallback text.
    pub async fn translate_outcome(&self, text: &str, target_lang: &str) -> TranslationOutcome {
        let result = self.try_translate(text, target_lang).await;

        Self::fallback(text, target_lang, result)
    }

    /// Translates `text` from `source_lang` into `target_lang`.
    ///
    /// The cache key includes both languages. Falls back to the original text on provider
    /// failure.
    pub async fn translate_from(&self, text: &str, target_lang: &str, source_lang: &str) -> String {
        let result = self.try_translate_from(text, target_lang, source_lang).await;

        Self::fallback(text, target_lang, result).text
    }

    /// Same as [`Translator::translate_from`] but reports provider failures.
    pub async fn try_translate_from(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: &str,
    ) -> Result<String, TranslateError> {
        if target_lang == source_lang {
            return Ok(text.to_string());
        }

        self.cached_or_fetch(text, target_lang, Some(source_lang))
            .await
    }

    /// Translates every text from the source language into `target_lang`.
    ///
    /// Texts are translated concurrently and independently: order and length are preserved and
    /// a failing element falls back to its own original text without affecting the others.
    pub async fn translate_all(&self, texts: &[String], target_lang: &str) -> Vec<String> {
        self.translate_all_detailed(texts, target_lang)
            .await
            .into_iter()
            .map(|outcome| outcome.text)
            .collect()
    }

    /// Same as [`Translator::translate_all`] but keeps per-element failures.
    pub async fn translate_all_detailed(
        &self,
        texts: &[String],
        target_lang: &str,
    ) -> Vec<TranslationOutcome> {
        let source_lang = self.source_lang.as_str();

        join_all(texts.iter().map(|text| async move {
            let result = self.try_translate_from(text, target_lang, source_lang).await;
            Self::fallback(text, target_lang, result)
        }))
        .await
    }

    /// Translates the text-bearing fields of a property listing.
    ///
    /// [`PROPERTY_TEXT_FIELDS`] holding strings are translated in place. The
    /// [`PROPERTY_FEATURES_FIELD`] is decoded as a JSON array of strings and, when that
    /// succeeds, replaced by the array of translated labels; any other value is left untouched.
    /// Every other field passes through. When `target_lang` is the source language the record is
    /// returned without inspecting any field, and values that are not JSON objects are returned
    /// unchanged.
    pub async fn translate_property(&self, mut property: Value, target_lang: &str) -> Value {
        if target_lang == self.source_lang {
            return property;
        }

        let source_lang = self.source_lang.as_str();

        let Some(fields) = property.as_object_mut() else {
            return property;
        };

        for field in PROPERTY_TEXT_FIELDS {
            let text = match fields.get(field) {
                Some(Value::String(text)) => text.clone(),
                _ => continue,
            };

            let translated = self.translate_from(&text, target_lang, source_lang).await;
            fields.insert(field.to_string(), Value::String(translated));
        }

        let features = match fields.get(PROPERTY_FEATURES_FIELD) {
            Some(Value::String(raw)) => serde_json::from_str::<Vec<String>>(raw).ok(),
            _ => None,
        };

        if let Some(features) = features {
            let translated = self.translate_all(&features, target_lang).await;
            fields.insert(
                PROPERTY_FEATURES_FIELD.to_string(),
                Value::Array(translated.into_iter().map(Value::String).collect()),
            );
        }

        property
    }

    async fn cached_or_fetch(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: Option<&str>,
    ) -> Result<String, TranslateError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let key = TranslationCache::key(text, source_lang, target_lang);
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let translated = self
            .provider
            .translate(text, target_lang, source_lang)
            .await?;

        self.cache.insert(key, translated.clone());

        Ok(translated)
    }

    fn fallback(
        text: &str,
        target_lang: &str,
        result: Result<String, TranslateError>,
    ) -> TranslationOutcome {
        match result {
            Ok(translated) => TranslationOutcome {
                text: translated,
                error: None,
            },
            Err(e) => {
                tracing::warn!(
                    target_lang = %target_lang,
                    "Translation failed, using original text: {}",
                    e
                );

                TranslationOutcome {
                    text: text.to_string(),
                    error: Some(e),
                }
            }
        }
    }
}
