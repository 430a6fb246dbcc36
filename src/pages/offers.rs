//! Products currently on sale.

use dioxus::prelude::*;
use shoepro_core::Product;

use crate::components::ProductCard;
use crate::context::use_catalog;
use crate::templates::EcommerceTemplate;

/// Active products with a compare-at price above their price, biggest
/// discount first.
pub fn on_sale(products: &[Product]) -> Vec<Product> {
    let mut sale: Vec<Product> = products
        .iter()
        .filter(|p| p.is_active() && p.is_on_sale())
        .cloned()
        .collect();
    sale.sort_by_key(|p| std::cmp::Reverse(p.discount_percent().unwrap_or(0)));
    sale
}

#[component]
pub fn Ofertas() -> Element {
    let catalog = use_catalog();

    let mut products: Signal<Vec<Product>> = use_signal(Vec::new);
    let mut loading = use_signal(|| true);

    use_effect(move || {
        let catalog = catalog.clone();
        spawn(async move {
            match catalog.list_products().await {
                Ok(list) => products.set(on_sale(&list)),
                Err(e) => tracing::error!(error = %e, "Failed to load products"),
            }
            loading.set(false);
        });
    });

    rsx! {
        EcommerceTemplate { page_title: "Ofertas".to_string(),
            section { class: "products-section",
                div { class: "container",
                    if loading() {
                        div { class: "products-grid",
                            for i in 0..4 {
                                div { key: "{i}", class: "product-skeleton animate-pulse" }
                            }
                        }
                    } else if products.read().is_empty() {
                        div { class: "empty-state",
                            h3 { class: "empty-state__title", "No hay ofertas activas" }
                            p { class: "empty-state__hint", "Vuelve pronto para descubrir nuevos descuentos" }
                        }
                    } else {
                        div { class: "products-grid",
                            for product in products() {
                                div { key: "{product.id}", class: "animate-scale-in hover-lift",
                                    ProductCard { product: product.clone() }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoepro_core::ProductStatus;

    fn product(id: &str, price: u64, compare_at: Option<u64>) -> Product {
        let mut p = Product::new(id, id, price);
        p.compare_at_price = compare_at;
        p
    }

    #[test]
    fn keeps_only_discounted_products() {
        let products = vec![
            product("full", 100_000, None),
            product("same", 100_000, Some(100_000)),
            product("sale", 80_000, Some(100_000)),
        ];
        let ids: Vec<_> = on_sale(&products).into_iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["sale"]);
    }

    #[test]
    fn biggest_discount_first() {
        let products = vec![
            product("ten", 90_000, Some(100_000)),
            product("half", 50_000, Some(100_000)),
            product("quarter", 75_000, Some(100_000)),
        ];
        let ids: Vec<_> = on_sale(&products).into_iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["half", "quarter", "ten"]);
    }

    #[test]
    fn skips_inactive_products() {
        let mut draft = product("draft", 50_000, Some(100_000));
        draft.status = ProductStatus::Draft;
        assert!(on_sale(&[draft]).is_empty());
    }
}
