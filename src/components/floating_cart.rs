//! Floating cart drawer.
//!
//! Slides over the page while the cart UI is open. Lists the cart lines
//! with quantity steppers, the subtotal and the free shipping hint.

use dioxus::prelude::*;
use shoepro_core::{format_price, CartItem};
use shoepro_ui::{Button, ButtonVariant, IconButton, Icon, IconKind};

use crate::app::Route;
use crate::context::{use_cart, use_cart_ui, use_store_config};

/// Free shipping hint for a subtotal.
pub fn shipping_hint(remaining: Option<u64>, currency_symbol: &str) -> String {
    match remaining {
        Some(amount) => format!(
            "Te faltan {} para el envío gratis",
            format_price(amount, currency_symbol)
        ),
        None => "¡Tu envío es gratis!".to_string(),
    }
}

#[component]
pub fn FloatingCart() -> Element {
    let mut cart = use_cart();
    let mut cart_ui = use_cart_ui();
    let config = use_store_config();
    let navigator = use_navigator();

    if !cart_ui().open {
        return VNode::empty();
    }

    let snapshot = cart();
    let symbol = config.currency_symbol.clone();
    let subtotal = format_price(snapshot.subtotal(), &symbol);
    let hint = shipping_hint(
        snapshot.remaining_for_free_shipping(config.free_shipping_threshold),
        &symbol,
    );
    let total_items = snapshot.total_items();

    rsx! {
        div {
            class: "floating-cart__backdrop",
            onclick: move |_| cart_ui.write().close_cart(),
        }

        aside { class: "floating-cart", role: "dialog", "aria-label": "Carrito de compras",
            header { class: "floating-cart__header",
                h2 { class: "floating-cart__title", "Tu carrito ({total_items})" }
                IconButton {
                    aria_label: "Cerrar carrito".to_string(),
                    onclick: move |_| cart_ui.write().close_cart(),
                    Icon { kind: IconKind::X, size: 20 }
                }
            }

            if snapshot.is_empty() {
                div { class: "floating-cart__empty",
                    Icon { kind: IconKind::ShoppingCart, size: 48 }
                    p { "Tu carrito está vacío" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| cart_ui.write().close_cart(),
                        "Seguir comprando"
                    }
                }
            } else {
                ul { class: "floating-cart__items",
                    for item in snapshot.items.iter() {
                        CartLine {
                            key: "{item.product_id}",
                            item: item.clone(),
                            currency_symbol: symbol.clone(),
                        }
                    }
                }

                footer { class: "floating-cart__footer",
                    p { class: "floating-cart__hint", "{hint}" }
                    div { class: "floating-cart__subtotal",
                        span { "Subtotal" }
                        span { class: "floating-cart__amount", "{subtotal}" }
                    }
                    Button {
                        class: "w-full".to_string(),
                        onclick: move |_| {
                            cart_ui.write().close_cart();
                            navigator.push(Route::Contacto {});
                        },
                        "Finalizar compra"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "w-full".to_string(),
                        onclick: move |_| cart.write().clear(),
                        "Vaciar carrito"
                    }
                }
            }
        }
    }
}

/// One line in the drawer with its quantity stepper
#[component]
fn CartLine(item: CartItem, currency_symbol: String) -> Element {
    let mut cart = use_cart();

    let unit_price = format_price(item.price, &currency_symbol);
    let line_total = format_price(item.line_total(), &currency_symbol);
    let quantity = item.quantity;

    let dec_id = item.product_id.clone();
    let inc_id = item.product_id.clone();
    let remove_id = item.product_id.clone();

    rsx! {
        li { class: "cart-line",
            div { class: "cart-line__media",
                if let Some(url) = &item.image {
                    img { class: "cart-line__img", src: "{url}", alt: "{item.title}" }
                } else {
                    div { class: "cart-line__placeholder" }
                }
            }

            div { class: "cart-line__info",
                p { class: "cart-line__title", "{item.title}" }
                p { class: "cart-line__price", "{unit_price}" }

                div { class: "cart-line__stepper",
                    IconButton {
                        aria_label: "Quitar uno".to_string(),
                        onclick: move |_| {
                            cart.write().set_quantity(&dec_id, quantity.saturating_sub(1));
                        },
                        Icon { kind: IconKind::Minus, size: 14 }
                    }
                    span { class: "cart-line__qty", "{quantity}" }
                    IconButton {
                        aria_label: "Agregar uno".to_string(),
                        onclick: move |_| {
                            cart.write().set_quantity(&inc_id, quantity.saturating_add(1));
                        },
                        Icon { kind: IconKind::Plus, size: 14 }
                    }
                }
            }

            div { class: "cart-line__side",
                span { class: "cart-line__total", "{line_total}" }
                IconButton {
                    aria_label: "Eliminar".to_string(),
                    class: "cart-line__remove".to_string(),
                    onclick: move |_| {
                        cart.write().remove(&remove_id);
                    },
                    Icon { kind: IconKind::Trash, size: 16 }
                }
            }
        }
    }
}
