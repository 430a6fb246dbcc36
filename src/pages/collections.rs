//! All collections page.

use dioxus::prelude::*;
use shoepro_core::{Collection, CollectionId};

use crate::app::Route;
use crate::components::CollectionCard;
use crate::context::use_catalog;
use crate::templates::EcommerceTemplate;

/// Grid of every collection. "Ver Productos" opens `/collections/:id`.
#[component]
pub fn Collections() -> Element {
    let catalog = use_catalog();
    let navigator = use_navigator();

    let mut collections: Signal<Vec<Collection>> = use_signal(Vec::new);
    let mut loading = use_signal(|| true);

    use_effect(move || {
        let catalog = catalog.clone();
        spawn(async move {
            match catalog.list_collections().await {
                Ok(list) => collections.set(list),
                Err(e) => tracing::error!(error = %e, "Failed to load collections"),
            }
            loading.set(false);
        });
    });

    let open_collection = move |id: CollectionId| {
        navigator.push(Route::CollectionProducts { id: id.to_string() });
    };

    rsx! {
        EcommerceTemplate { page_title: "Colecciones".to_string(),
            section { class: "collections-section",
                div { class: "container",
                    if loading() {
                        div { class: "collections-grid",
                            for i in 0..3 {
                                div { key: "{i}", class: "collection-skeleton animate-pulse" }
                            }
                        }
                    } else if collections.read().is_empty() {
                        div { class: "empty-state",
                            h3 { class: "empty-state__title", "No hay colecciones disponibles" }
                            p { class: "empty-state__hint", "Pronto tendremos nuevas colecciones" }
                        }
                    } else {
                        div { class: "collections-grid",
                            for collection in collections() {
                                div { key: "{collection.id}", class: "animate-fade-in-up",
                                    CollectionCard {
                                        collection: collection.clone(),
                                        on_view_products: open_collection,
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
