use dioxus::prelude::*;
use shoepro_core::{Catalog, DemoCatalog};

use crate::context::provide_store_context;
use crate::pages::{
    Blog, CollectionProducts, Collections, Contacto, Devoluciones, Envios, Index, NotFound, Ofertas,
    Privacidad, Tallas, Terminos,
};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with search, collections and products
/// - `/collections` - All collections
/// - `/collections/:id` - Landing page filtered to one collection
/// - `/ofertas` - Products on sale
/// - the rest are informational pages linked from the header and footer
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Index {},
    #[route("/collections")]
    Collections {},
    #[route("/collections/:id")]
    CollectionProducts { id: String },
    #[route("/ofertas")]
    Ofertas {},
    #[route("/blog")]
    Blog {},
    #[route("/contacto")]
    Contacto {},
    #[route("/envios")]
    Envios {},
    #[route("/devoluciones")]
    Devoluciones {},
    #[route("/tallas")]
    Tallas {},
    #[route("/privacidad")]
    Privacidad {},
    #[route("/terminos")]
    Terminos {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, the storefront contexts, and routing.
#[component]
pub fn App() -> Element {
    let boot = crate::bootstrap();

    let catalog = use_hook(|| match Catalog::from_config(&boot.config) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create catalog backend, falling back to demo catalog");
            Catalog::Demo(DemoCatalog::bundled().unwrap_or_default())
        }
    });

    provide_store_context(catalog, boot.config.clone(), boot.cart_store.clone());

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
