//! Boundary to the external translation service.

use std::future::Future;

use thiserror::Error;

/// Failure of a single call to the translation provider.
///
/// The translation layer never surfaces this to end users; it is logged and replaced by the
/// original text. It is only observable through [`Translator::try_translate`] and friends,
/// which the HTTP boundary uses to report degraded translations.
///
/// [`Translator::try_translate`]: crate::translation::Translator::try_translate
#[derive(Error, Debug)]
pub enum TranslateError {
    /// The request never produced a response (network, DNS, timeout).
    #[error("Translation request failed: {0}")]
    Request(String),
    /// The provider answered with a non-success status code.
    #[error("Translation provider responded with status {status}: {body}")]
    Status { status: u16, body: String },
    /// The provider answered but the body did not contain a translation.
    #[error("Malformed translation response: {0}")]
    MalformedResponse(String),
    /// HTTP client error from the server-side provider.
    #[cfg(feature = "server")]
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}

/// A service able to translate one string at a time.
///
/// Implemented by the Google Cloud Translation client on the server and by the `/api/translate`
/// client in the browser.
pub trait TranslationProvider {
    /// Translates `text` into `target_lang`.
    ///
    /// `source_lang` is `None` when the caller lets the provider detect the source language.
    fn translate(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: Option<&str>,
    ) -> impl Future<Output = Result<String, TranslateError>>;
}
