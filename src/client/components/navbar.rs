use dioxus::prelude::*;

use crate::client::{components::LanguageToggle, hooks::use_translated};

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    let tagline = use_translated("Anunțuri imobiliare");

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                div { class: "flex items-center gap-2",
                    Link { to: Route::Home {}, class: "text-xl",
                        "Vitrina"
                    }
                    p { class: "text-xs",
                        "{tagline}"
                    }
                }
            }
            div {
                class: "navbar-end",
                LanguageToggle {}
            }
        }

        Outlet::<Route> {}
    }
}
