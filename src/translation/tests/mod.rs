//! Tests for the translation layer.
//!
//! Every test runs against [`StubProvider`], an in-memory provider that serves canned
//! translations, fails on demand and counts how often it was called.


use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use crate::translation::{TranslateError, TranslationCache, TranslationProvider, Translator};

/// Canned translation provider used across translation tests.
#[derive(Clone, Default)]
pub struct StubProvider {
    translations: HashMap<String, String>,
    failing: HashSet<String>,
    always_fail: bool,
    max_calls: Option<usize>,
    calls: Arc<AtomicUsize>,
    source_langs: Arc<Mutex<Vec<Option<String>>>>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `translated` whenever `text` is requested.
    pub fn with(mut self, text: &str, translated: &str) -> Self {
        self.translations
            .insert(text.to_string(), translated.to_string());
        self
    }

    /// Fail every request for `text`.
    pub fn failing_on(mut self, text: &str) -> Self {
        self.failing.insert(text.to_string());
        self
    }

    /// Fail every request.
    pub fn always_failing() -> Self {
        Self {
            always_fail: true,
            ..Self::default()
        }
    }

    /// Fail any call past the `max_calls`-th one.
    pub fn allow_calls(mut self, max_calls: usize) -> Self {
        self.max_calls = Some(max_calls);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn source_langs(&self) -> Vec<Option<String>> {
        self.source_langs.lock().unwrap().clone()
    }
}

impl TranslationProvider for StubProvider {
    async fn translate(
        &self,
        text: &str,
        _target_lang: &str,
        source_lang: Option<&str>,
    ) -> Result<String, TranslateError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.source_langs
            .lock()
            .unwrap()
            .push(source_lang.map(str::to_string));

        if let Some(max_calls) = self.max_calls {
            if call > max_calls {
                return Err(TranslateError::Request(format!(
                    "provider called {} times, only {} allowed",
                    call, max_calls
                )));
            }
        }

        if self.always_fail || self.failing.contains(text) {
            return Err(TranslateError::Request("connection refused".to_string()));
        }

        self.translations
            .get(text)
            .cloned()
            .ok_or_else(|| TranslateError::MalformedResponse(format!("no translation for {}", text)))
    }
}

/// Builds a translator over a clone of `provider` with a fresh cache.
///
/// The provider's call counter is shared with the clone, so `provider.calls()` reflects the
/// calls made through the returned translator.
pub fn translator(provider: &StubProvider) -> Translator<StubProvider> {
    Translator::new(provider.clone(), TranslationCache::unbounded())
}
