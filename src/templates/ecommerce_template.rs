//! Store template: header with navigation and cart, footer with link
//! columns, and the floating cart.

use chrono::Datelike;
use dioxus::prelude::*;
use shoepro_core::badge_label;
use shoepro_ui::{Badge, BadgeTone, Button, ButtonSize, ButtonVariant, Icon, IconKind};

use super::page_template::{PageLayout, PageTemplate};
use crate::app::Route;
use crate::components::{BrandLogo, FloatingCart, SocialLinks, STORE_NAME};
use crate::context::{use_cart, use_cart_ui};

/// A labelled link to a store route
#[derive(Clone, PartialEq, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

impl NavLink {
    fn new(label: &'static str, route: Route) -> Self {
        Self { label, route }
    }
}

/// Header navigation, repeated as the footer's quick links
pub fn main_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Inicio", Route::Index {}),
        NavLink::new("Colecciones", Route::Collections {}),
        NavLink::new("Ofertas", Route::Ofertas {}),
        NavLink::new("Blog", Route::Blog {}),
    ]
}

/// Footer customer service column
pub fn service_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Contacto", Route::Contacto {}),
        NavLink::new("Envíos", Route::Envios {}),
        NavLink::new("Devoluciones", Route::Devoluciones {}),
        NavLink::new("Guía de Tallas", Route::Tallas {}),
    ]
}

/// Footer legal links
pub fn legal_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Política de Privacidad", Route::Privacidad {}),
        NavLink::new("Términos y Condiciones", Route::Terminos {}),
    ]
}

/// Item count bubble on the cart button. Renders nothing for an empty cart.
#[component]
pub fn CartBadge(total: u32) -> Element {
    match badge_label(total) {
        Some(label) => rsx! {
            Badge { tone: BadgeTone::Counter, class: "header-cart__badge".to_string(), "{label}" }
        },
        None => VNode::empty(),
    }
}

/// Store page template.
///
/// # Example
///
/// ```ignore
/// rsx! {
///     EcommerceTemplate { page_title: "Envíos".to_string(),
///         p { "..." }
///     }
/// }
/// ```
#[component]
pub fn EcommerceTemplate(
    children: Element,
    #[props(default)] page_title: Option<String>,
    #[props(default = true)] show_cart: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] header_class: Option<String>,
    #[props(default)] footer_class: Option<String>,
    #[props(default)] layout: PageLayout,
) -> Element {
    let cart = use_cart();
    let mut cart_ui = use_cart_ui();
    let mut mobile_open = use_signal(|| false);

    let total_items = cart.read().total_items();
    let header_class = format!("site-header {}", header_class.unwrap_or_default());
    let footer_class = format!("site-footer {}", footer_class.unwrap_or_default());
    let year = chrono::Local::now().year();
    let menu_icon = if mobile_open() { IconKind::X } else { IconKind::Menu };
    let page_class = class.unwrap_or_default();

    let header = rsx! {
        div { class: "{header_class}",
            div { class: "container",
                div { class: "site-header__bar",
                    // Logo
                    Link { to: Route::Index {}, class: "site-header__logo",
                        BrandLogo {}
                    }

                    // Navigation
                    nav { class: "site-header__nav",
                        for link in main_links() {
                            Link { key: "{link.label}", to: link.route, class: "site-header__link",
                                "{link.label}"
                            }
                        }
                    }

                    // Right side
                    div { class: "site-header__actions",
                        if show_cart {
                            Button {
                                variant: ButtonVariant::Ghost,
                                size: ButtonSize::Icon,
                                class: "header-cart".to_string(),
                                aria_label: "Abrir carrito".to_string(),
                                onclick: move |_| cart_ui.write().open_cart(),
                                Icon { kind: IconKind::ShoppingCart, size: 20 }
                                CartBadge { total: total_items }
                            }
                        }

                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            class: "site-header__menu-toggle".to_string(),
                            aria_label: "Menú".to_string(),
                            onclick: move |_| mobile_open.set(!mobile_open()),
                            Icon { kind: menu_icon, size: 20 }
                        }
                    }
                }

                if mobile_open() {
                    nav { class: "mobile-menu",
                        for link in main_links() {
                            Link {
                                key: "{link.label}",
                                to: link.route,
                                class: "mobile-menu__link",
                                onclick: move |_| mobile_open.set(false),
                                "{link.label}"
                            }
                        }
                    }
                }

                if let Some(title) = &page_title {
                    div { class: "site-header__title",
                        h1 { class: "page-title", "{title}" }
                    }
                }
            }
        }
    };

    let footer = rsx! {
        div { class: "{footer_class}",
            div { class: "container",
                div { class: "site-footer__grid",
                    // Brand
                    div { class: "site-footer__brand",
                        div { class: "site-footer__logo", BrandLogo { inverted: true } }
                        p { class: "site-footer__blurb",
                            "Tu tienda de confianza para encontrar los mejores zapatos. "
                            "Calidad premium, estilo único y comodidad garantizada."
                        }
                        SocialLinks {}
                    }

                    // Quick links
                    div { class: "site-footer__column",
                        h3 { class: "site-footer__heading", "Enlaces Rápidos" }
                        for link in main_links() {
                            Link { key: "{link.label}", to: link.route, class: "site-footer__link",
                                "{link.label}"
                            }
                        }
                    }

                    // Customer service
                    div { class: "site-footer__column",
                        h3 { class: "site-footer__heading", "Atención al Cliente" }
                        for link in service_links() {
                            Link { key: "{link.label}", to: link.route, class: "site-footer__link",
                                "{link.label}"
                            }
                        }
                    }
                }

                div { class: "site-footer__bottom",
                    p { class: "site-footer__copyright",
                        "© {year} {STORE_NAME}. Todos los derechos reservados."
                    }
                    div { class: "site-footer__legal",
                        for link in legal_links() {
                            Link { key: "{link.label}", to: link.route, class: "site-footer__legal-link",
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        PageTemplate {
            header,
            footer,
            class: page_class,
            layout,
            {children}
        }

        if show_cart {
            FloatingCart {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(links: Vec<NavLink>) -> Vec<String> {
        links.into_iter().map(|l| l.route.to_string()).collect()
    }

    #[test]
    fn header_links_point_to_store_routes() {
        assert_eq!(paths(main_links()), vec!["/", "/collections", "/ofertas", "/blog"]);
    }

    #[test]
    fn service_links_point_to_help_pages() {
        assert_eq!(
            paths(service_links()),
            vec!["/contacto", "/envios", "/devoluciones", "/tallas"]
        );
    }

    #[test]
    fn legal_links_point_to_policies() {
        assert_eq!(paths(legal_links()), vec!["/privacidad", "/terminos"]);
    }

    fn render_badge(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn cart_badge_shows_exact_count() {
        fn app() -> Element {
            rsx! { CartBadge { total: 42 } }
        }
        let html = render_badge(app);
        assert!(html.contains(">42<"));
    }

    #[test]
    fn cart_badge_caps_at_99_plus() {
        fn at_limit() -> Element {
            rsx! { CartBadge { total: 99 } }
        }
        fn over_limit() -> Element {
            rsx! { CartBadge { total: 150 } }
        }
        assert!(render_badge(at_limit).contains(">99<"));
        assert!(render_badge(over_limit).contains(">99+<"));
    }

    #[test]
    fn cart_badge_hidden_when_empty() {
        fn app() -> Element {
            rsx! { CartBadge { total: 0 } }
        }
        assert!(!render_badge(app).contains("header-cart__badge"));
    }
}
