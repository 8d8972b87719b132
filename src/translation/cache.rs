//! Process-wide translation cache.
//!
//! # Eviction
//!
//! There is none. Entries live as long as the cache value itself, which the composition root
//! creates once at startup and drops at shutdown, so the cache is bounded only by a process
//! restart. Listing content is a slowly changing, finite vocabulary (titles, street names,
//! feature labels), which keeps the working set small in practice. Nothing is persisted.

use std::sync::Arc;

use dashmap::DashMap;

/// Separator used between the parts of a cache key, never present in a language code
const KEY_SEPARATOR: char = '_';

/// Memoized translations shared by every clone of the handle.
///
/// Cloning is cheap and every clone observes the same entries. Reads and writes go through a
/// concurrent map; concurrent misses for the same key are not deduplicated and the last write
/// wins, which is harmless because the provider returns the same translation for the same input.
#[derive(Clone, Debug, Default)]
pub struct TranslationCache {
    entries: Arc<DashMap<String, String>>,
}

impl TranslationCache {
    /// Creates an empty cache with no eviction policy.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Builds the cache key for a translation.
    ///
    /// The key is the text followed by the source language (when the caller supplied one) and
    /// the target language, joined with `_`. Language codes never contain `_`, so the text can
    /// always be recovered by stripping the trailing language parts.
    ///
    /// # Arguments
    /// - `text` - The text being translated
    /// - `source_lang` - Source language code when translating with an explicit source
    /// - `target_lang` - Target language code
    ///
    /// # Returns
    /// - `String` - `text_source_target` or `text_target`
    pub fn key(text: &str, source_lang: Option<&str>, target_lang: &str) -> String {
        let mut key = String::with_capacity(text.len() + target_lang.len() + 8);
        key.push_str(text);
        if let Some(source_lang) = source_lang {
            key.push(KEY_SEPARATOR);
            key.push_str(source_lang);
        }
        key.push(KEY_SEPARATOR);
        key.push_str(target_lang);
        key
    }

    /// Returns the cached translation for `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Stores a translation, replacing any previous value for the same key.
    pub fn insert(&self, key: String, translated: String) {
        self.entries.insert(key, translated);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of memoized translations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
