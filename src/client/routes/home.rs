use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{components::Page, hooks::use_translated};

#[component]
pub fn Home() -> Element {
    let heading = use_translated("Găsește-ți următoarea casă");
    let intro = use_translated(
        "Apartamente, case și terenuri de vânzare sau de închiriat, direct de la proprietari.",
    );
    let api_docs = use_translated("Documentație API");

    rsx!(
        Title { "Vitrina" }
        Meta {
            name: "description",
            content: "Property listings with on-demand translation."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 px-4 max-w-256",
                p { class: "text-2xl font-bold text-center",
                    "{heading}"
                }
                p { class: "text-center",
                    "{intro}"
                }
                a { href: "/api/docs",
                    button {
                        class: "btn btn-secondary",
                        "{api_docs}"
                    }
                }
            }
        }
    )
}
