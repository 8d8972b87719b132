use dioxus::prelude::*;

use crate::client::{language::UiLanguage, router::Route};

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(UiLanguage::default()));

    #[cfg(feature = "web")]
    use_context_provider(crate::client::util::translate::ClientTranslator::new);

    rsx! {
        Router::<Route> {}
    }
}
