//! Translation layer with memoization and original-text fallback.
//!
//! Translating listing content is a best-effort enhancement: a provider outage must never blank
//! or block the page, so every entry point here degrades to the original text instead of
//! failing. Successful translations are memoized in a [`TranslationCache`] shared by every caller
//! of the process, keyed by the text and the language pair.
//!
//! The layer is used in two flavours:
//! - **server** - [`Translator::translate_from`] takes an explicit source language and keys the
//!   cache by `text_source_target`
//! - **client/API** - [`Translator::translate`] uses the translator's fixed source language
//!   (Romanian by default) and keys the cache by `text_target`
//!
//! On top of single strings the translator handles lists of strings and property listings
//! encoded as JSON objects.

pub mod cache;
pub mod provider;
pub mod translator;

#[cfg(test)]
mod tests;

pub use cache::TranslationCache;
pub use provider::{TranslateError, TranslationProvider};
pub use translator::{
    TranslationOutcome, Translator, DEFAULT_SOURCE_LANG, PROPERTY_FEATURES_FIELD,
    PROPERTY_TEXT_FIELDS,
};
