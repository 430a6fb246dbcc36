//! Collection card for the landing page grid.

use dioxus::prelude::*;
use shoepro_core::{Collection, CollectionId};
use shoepro_ui::{Badge, Button, ButtonVariant, Card, CardContent, Icon, IconKind};

/// Card showing one collection.
///
/// Displays:
/// - Cover image, or the collection name as a placeholder
/// - "Destacado" badge for featured collections
/// - Name and optional description
/// - "Ver Productos" button
///
/// # Props
///
/// * `collection` - The collection to display
/// * `on_view_products` - Called with the collection id when the button is clicked
#[component]
pub fn CollectionCard(collection: Collection, on_view_products: EventHandler<CollectionId>) -> Element {
    let collection_id = collection.id.clone();

    rsx! {
        Card { class: "collection-card hover-lift".to_string(),
            CardContent { class: "collection-card__content".to_string(),
                div { class: "collection-card__media",
                    if let Some(url) = collection.image_url() {
                        img {
                            class: "collection-card__img",
                            src: "{url}",
                            alt: "{collection.name}",
                        }
                    } else {
                        div { class: "collection-card__placeholder",
                            "{collection.name}"
                        }
                    }

                    div { class: "collection-card__overlay" }

                    if collection.featured {
                        div { class: "collection-card__badge",
                            Badge { "Destacado" }
                        }
                    }
                }

                div { class: "collection-card__body",
                    div { class: "collection-card__text",
                        h3 { class: "collection-card__title", "{collection.name}" }

                        if let Some(description) = collection.description_text() {
                            p { class: "collection-card__description", "{description}" }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Outline,
                        class: "collection-card__button w-full".to_string(),
                        onclick: move |_| view_products(&collection_id, &on_view_products),
                        span { "Ver Productos" }
                        Icon { kind: IconKind::ArrowRight, size: 16, class: "collection-card__arrow".to_string() }
                    }
                }
            }
        }
    }
}

/// Click handler body for the "Ver Productos" button
fn view_products(id: &CollectionId, on_view_products: &EventHandler<CollectionId>) {
    tracing::debug!(collection = %id, "View collection products");
    on_view_products.call(id.clone());
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn collection_without_image_renders_name_placeholder() {
        fn app() -> Element {
            let collection = Collection::new("botas", "Botas de Montaña");
            rsx! { CollectionCard { collection, on_view_products: move |_| {} } }
        }
        let html = render(app);
        assert!(html.contains("collection-card__placeholder"));
        assert!(html.contains("Botas de Montaña"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn collection_with_image_renders_img() {
        fn app() -> Element {
            let mut collection = Collection::new("botas", "Botas");
            collection.image = Some("https://cdn.example/botas.jpg".to_string());
            rsx! { CollectionCard { collection, on_view_products: move |_| {} } }
        }
        let html = render(app);
        assert!(html.contains("<img"));
        assert!(html.contains("https://cdn.example/botas.jpg"));
        assert!(!html.contains("collection-card__placeholder"));
    }

    #[test]
    fn featured_collection_shows_badge() {
        fn app() -> Element {
            let mut collection = Collection::new("deportivos", "Deportivos");
            collection.featured = true;
            rsx! { CollectionCard { collection, on_view_products: move |_| {} } }
        }
        assert!(render(app).contains("Destacado"));
    }

    #[test]
    fn regular_collection_has_no_badge() {
        fn app() -> Element {
            let collection = Collection::new("casuales", "Casuales");
            rsx! { CollectionCard { collection, on_view_products: move |_| {} } }
        }
        assert!(!render(app).contains("Destacado"));
    }

    #[test]
    fn description_is_optional() {
        fn with_description() -> Element {
            let mut collection = Collection::new("casuales", "Casuales");
            collection.description = Some("Para el día a día".to_string());
            rsx! { CollectionCard { collection, on_view_products: move |_| {} } }
        }
        fn without_description() -> Element {
            let collection = Collection::new("casuales", "Casuales");
            rsx! { CollectionCard { collection, on_view_products: move |_| {} } }
        }
        assert!(render(with_description).contains("Para el día a día"));
        assert!(!render(without_description).contains("collection-card__description"));
    }

    #[test]
    fn button_label_is_ver_productos() {
        fn app() -> Element {
            let collection = Collection::new("casuales", "Casuales");
            rsx! { CollectionCard { collection, on_view_products: move |_| {} } }
        }
        assert!(render(app).contains("Ver Productos"));
    }

    #[test]
    fn view_products_passes_the_collection_id() {
        fn app(seen: Rc<RefCell<Vec<CollectionId>>>) -> Element {
            let collection = Collection::new("botas", "Botas");
            let on_view_products = EventHandler::new(move |id: CollectionId| seen.borrow_mut().push(id));
            use_hook(|| view_products(&collection.id, &on_view_products));
            rsx! { CollectionCard { collection, on_view_products } }
        }

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut dom = VirtualDom::new_with_props(app, seen.clone());
        dom.rebuild_in_place();

        assert_eq!(*seen.borrow(), vec![CollectionId::new("botas")]);
    }
}
