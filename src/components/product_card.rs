//! Product card used in the product grids.

use dioxus::prelude::*;
use shoepro_core::{format_price, Product};
use shoepro_ui::{Badge, BadgeTone, Button, Card, CardContent, Icon, IconKind};

use crate::context::{use_cart, use_cart_ui, use_store_config};

/// Card showing one product with an "add to cart" action.
///
/// Adding puts one unit in the shared cart and opens the floating cart.
#[component]
pub fn ProductCard(product: Product) -> Element {
    let mut cart = use_cart();
    let mut cart_ui = use_cart_ui();
    let config = use_store_config();

    let price = format_price(product.price, &config.currency_symbol);
    let compare_at = product
        .compare_at_price
        .filter(|_| product.is_on_sale())
        .map(|original| format_price(original, &config.currency_symbol));
    let discount = product.discount_percent();

    let for_cart = product.clone();
    let add_to_cart = move |_: ()| {
        cart.write().add_product(&for_cart, 1);
        cart_ui.write().open_cart();
        tracing::info!(product = %for_cart.id, "Added to cart");
    };

    rsx! {
        Card { class: "product-card hover-lift".to_string(),
            CardContent { class: "product-card__content".to_string(),
                div { class: "product-card__media",
                    if let Some(url) = product.primary_image() {
                        img {
                            class: "product-card__img",
                            src: "{url}",
                            alt: "{product.title}",
                        }
                    } else {
                        div { class: "product-card__placeholder", "{product.title}" }
                    }

                    if let Some(off) = discount {
                        div { class: "product-card__badge",
                            Badge { tone: BadgeTone::Sale, "-{off}%" }
                        }
                    }
                }

                div { class: "product-card__body",
                    h3 { class: "product-card__title", "{product.title}" }

                    if let Some(description) = &product.description {
                        p { class: "product-card__description", "{description}" }
                    }

                    div { class: "product-card__prices",
                        span { class: "product-card__price", "{price}" }
                        if let Some(original) = compare_at {
                            span { class: "product-card__compare", "{original}" }
                        }
                    }

                    Button {
                        class: "w-full".to_string(),
                        onclick: add_to_cart,
                        Icon { kind: IconKind::ShoppingCart, size: 16 }
                        span { "Agregar al carrito" }
                    }
                }
            }
        }
    }
}
