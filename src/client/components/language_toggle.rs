use dioxus::prelude::*;

use crate::client::language::UiLanguage;

/// Switches the interface between the listing language and English
#[component]
pub fn LanguageToggle() -> Element {
    let mut language = use_context::<Signal<UiLanguage>>();
    let next = language().toggled();

    rsx! {
        button {
            class: "btn btn-ghost btn-sm",
            onclick: move |_| language.set(next),
            "{next.label()}"
        }
    }
}
