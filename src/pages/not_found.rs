use dioxus::prelude::*;
use shoepro_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::templates::{EcommerceTemplate, PageLayout};

/// Fallback for unknown paths
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let path = format!("/{}", segments.join("/"));

    use_hook(|| tracing::warn!(path = %path, "Unknown route"));

    rsx! {
        EcommerceTemplate { layout: PageLayout::Centered,
            div { class: "empty-state not-found",
                h1 { class: "not-found__code", "404" }
                h2 { class: "empty-state__title", "Página no encontrada" }
                p { class: "empty-state__hint", "La página {path} no existe o fue movida." }
                Button {
                    variant: ButtonVariant::Default,
                    onclick: move |_| {
                        navigator.push(Route::Index {});
                    },
                    "Volver al inicio"
                }
            }
        }
    }
}
