#[cfg(feature = "web")]
use dioxus::prelude::*;

#[cfg(feature = "web")]
use crate::client::language::UiLanguage;

/// Displays `text` in the current interface language.
///
/// Renders the original text until the translation arrives and keeps it when translation
/// fails. Re-translates whenever the language in context changes; repeated texts are served
/// from the client translation cache.
#[cfg(feature = "web")]
pub fn use_translated(text: &'static str) -> String {
    use crate::client::util::translate::ClientTranslator;

    let language = use_context::<Signal<UiLanguage>>();
    let translator = use_context::<ClientTranslator>();

    let translated = use_resource(move || {
        let translator = translator.clone();
        let target_lang = language().code();

        async move { translator.translate(text, target_lang).await }
    });

    match &*translated.read_unchecked() {
        Some(translated) => translated.clone(),
        None => text.to_string(),
    }
}

/// Server-rendered markup always uses the listing language.
#[cfg(not(feature = "web"))]
pub fn use_translated(text: &'static str) -> String {
    text.to_string()
}
