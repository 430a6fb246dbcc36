//! Landing page view.
//!
//! Purely presentational: everything it shows comes from the
//! [`IndexLogic`] handle and every control calls back into it.

use dioxus::prelude::*;
use shoepro_core::{format_price, Collection, CollectionId, Product};
use shoepro_ui::{
    Button, ButtonSize, ButtonVariant, Icon, IconKind, Input, SearchInput,
};

use crate::app::Route;
use crate::components::{CollectionCard, ProductCard};
use crate::context::use_store_config;
use crate::headless::IndexLogic;
use crate::templates::EcommerceTemplate;

/// Placeholder cards shown while products load
pub const PRODUCT_SKELETON_COUNT: usize = 8;

/// Title block above the product grid
#[derive(Clone, PartialEq, Debug)]
pub struct ProductsHeading {
    pub title: String,
    pub subtitle: &'static str,
    /// Whether the "Ver Todos los Productos" button is shown
    pub show_all: bool,
}

/// Heading for the product grid given the current selection.
///
/// A selected id missing from `collections` still counts as a selection
/// and is titled "Colección".
pub fn products_heading(collections: &[Collection], selected: Option<&CollectionId>) -> ProductsHeading {
    match selected {
        Some(id) => ProductsHeading {
            title: collections
                .iter()
                .find(|c| &c.id == id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Colección".to_string()),
            subtitle: "Productos seleccionados de esta colección",
            show_all: true,
        },
        None => ProductsHeading {
            title: "Productos Destacados".to_string(),
            subtitle: "Los zapatos más populares de nuestra tienda",
            show_all: false,
        },
    }
}

/// Empty state title and hint, depending on whether a search is active.
pub fn empty_state(search_term: &str) -> (&'static str, &'static str) {
    if search_term.is_empty() {
        ("No hay productos disponibles", "Pronto tendremos nuevos productos")
    } else {
        ("No encontramos productos", "Intenta con otros términos de búsqueda")
    }
}

/// The collections grid only appears once loading finished with results
pub fn show_collections(loading: bool, collections: &[Collection]) -> bool {
    !loading && !collections.is_empty()
}

/// Staggered entrance for grid items
fn animation_delay(index: usize, step: f32) -> String {
    format!("animation-delay: {:.2}s", index as f32 * step)
}

#[component]
pub fn IndexUI(logic: IndexLogic) -> Element {
    let collections = (logic.collections)();
    let selected = (logic.selected_collection_id)();
    let heading = products_heading(&collections, selected.as_ref());
    let show_collections = show_collections((logic.loading_collections)(), &collections);

    rsx! {
        EcommerceTemplate { show_cart: true,
            Hero {
                search_term: (logic.search_term)(),
                on_search: move |term: String| logic.set_search_term(term),
            }

            Features {}

            if show_collections {
                CollectionsSection {
                    collections,
                    on_view_products: move |id: CollectionId| logic.handle_view_collection_products(id),
                }
            }

            ProductsSection {
                heading,
                loading: (logic.loading)(),
                products: (logic.filtered_products)(),
                search_term: (logic.search_term)(),
                on_show_all: move |_| logic.handle_show_all_products(),
            }

            Newsletter {}
        }
    }
}

#[component]
fn Hero(search_term: String, on_search: EventHandler<String>) -> Element {
    let navigator = use_navigator();

    rsx! {
        section { class: "hero gradient-hero",
            div { class: "hero__shade" }
            div { class: "container hero__inner animate-fade-in-up",
                h1 { class: "hero__title",
                    "Encuentra tu"
                    span { class: "hero__title-accent gradient-accent-text", "Estilo Perfecto" }
                }
                p { class: "hero__lead",
                    "Descubre la colección más exclusiva de zapatos premium. "
                    "Calidad, comodidad y estilo en cada paso."
                }

                div { class: "hero__search",
                    SearchInput {
                        value: search_term,
                        oninput: move |term| on_search.call(term),
                        placeholder: "Busca tu zapato ideal...".to_string(),
                        class: "hero__search-input".to_string(),
                    }
                }

                Button {
                    variant: ButtonVariant::Accent,
                    size: ButtonSize::Lg,
                    class: "animate-scale-in".to_string(),
                    onclick: move |_| {
                        navigator.push(Route::Collections {});
                    },
                    "Explorar Colección"
                }
            }

            div { class: "hero__glow hero__glow--top" }
            div { class: "hero__glow hero__glow--bottom" }
        }
    }
}

#[component]
fn Features() -> Element {
    let config = use_store_config();
    let threshold = format_price(config.free_shipping_threshold, &config.currency_symbol);

    rsx! {
        section { class: "features",
            div { class: "container features__grid",
                Feature {
                    icon: IconKind::Truck,
                    title: "Envío Gratis",
                    text: format!("En compras superiores a {threshold}"),
                }
                Feature {
                    icon: IconKind::Shield,
                    title: "Garantía Total",
                    text: "30 días de garantía en todos los productos",
                }
                Feature {
                    icon: IconKind::RefreshCw,
                    title: "Cambios Fáciles",
                    text: "Proceso de cambio simple y rápido",
                }
            }
        }
    }
}

#[component]
fn Feature(icon: IconKind, title: String, text: String) -> Element {
    rsx! {
        div { class: "feature hover-lift",
            div { class: "feature__icon",
                Icon { kind: icon, size: 32 }
            }
            h3 { class: "feature__title", "{title}" }
            p { class: "feature__text", "{text}" }
        }
    }
}

#[component]
fn CollectionsSection(collections: Vec<Collection>, on_view_products: EventHandler<CollectionId>) -> Element {
    rsx! {
        section { class: "collections-section",
            div { class: "container",
                div { class: "section-heading",
                    h2 { class: "section-heading__title", "Nuestras Colecciones" }
                    p { class: "section-heading__subtitle",
                        "Explora nuestras categorías cuidadosamente seleccionadas"
                    }
                }

                div { class: "collections-grid",
                    for (index, collection) in collections.into_iter().enumerate() {
                        div {
                            key: "{collection.id}",
                            class: "animate-fade-in-up hover-lift",
                            style: animation_delay(index, 0.1),
                            CollectionCard { collection: collection.clone(), on_view_products }
                        }
                    }
                }
            }
        }
    }
}

/// Product grid with its heading, skeletons and empty state
#[component]
pub fn ProductsSection(
    heading: ProductsHeading,
    loading: bool,
    products: Vec<Product>,
    search_term: String,
    on_show_all: EventHandler<()>,
) -> Element {
    let (empty_title, empty_hint) = empty_state(&search_term);

    rsx! {
        section { id: "productos", class: "products-section",
            div { class: "container",
                div { class: "products-section__header",
                    div {
                        h2 { class: "section-heading__title", "{heading.title}" }
                        p { class: "section-heading__subtitle", "{heading.subtitle}" }
                    }
                    if heading.show_all {
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "products-section__show-all".to_string(),
                            onclick: move |_| on_show_all.call(()),
                            "Ver Todos los Productos"
                        }
                    }
                }

                if loading {
                    div { class: "products-grid",
                        for i in 0..PRODUCT_SKELETON_COUNT {
                            div { key: "{i}", class: "product-skeleton animate-pulse" }
                        }
                    }
                } else if products.is_empty() {
                    div { class: "empty-state",
                        div { class: "empty-state__icon",
                            Icon { kind: IconKind::Search, size: 48 }
                        }
                        h3 { class: "empty-state__title", "{empty_title}" }
                        p { class: "empty-state__hint", "{empty_hint}" }
                    }
                } else {
                    div { class: "products-grid",
                        for (index, product) in products.into_iter().enumerate() {
                            div {
                                key: "{product.id}",
                                class: "animate-scale-in hover-lift",
                                style: animation_delay(index, 0.05),
                                ProductCard { product: product.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Newsletter() -> Element {
    rsx! {
        section { class: "newsletter gradient-hero",
            div { class: "container newsletter__inner",
                h2 { class: "newsletter__title", "Mantente al día con las últimas tendencias" }
                p { class: "newsletter__lead", "Suscríbete y recibe ofertas exclusivas y novedades" }
                div { class: "newsletter__form",
                    Input {
                        input_type: "email".to_string(),
                        placeholder: "Tu email".to_string(),
                        aria_label: "Tu email".to_string(),
                        class: "newsletter__input".to_string(),
                    }
                    Button { variant: ButtonVariant::Accent, "Suscribirse" }
                }
            }
        }
    }
}
