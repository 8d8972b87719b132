use dioxus::prelude::*;

use crate::client::{components::Page, hooks::use_translated};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let message = use_translated("Pagina nu a fost găsită");
    let path = segments.join("/");

    rsx!(
        Page { class: "flex flex-col items-center justify-center gap-2",
            p { class: "text-xl", "{message}" }
            p { class: "text-xs", "/{path}" }
        }
    )
}
