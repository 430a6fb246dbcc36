//! Landing page routes.
//!
//! Both routes build the same [`IndexLogic`](crate::headless::IndexLogic)
//! and hand it to [`IndexUI`]. `/collections/:id` preselects a collection.

use dioxus::prelude::*;
use shoepro_core::CollectionId;

use super::index_ui::IndexUI;
use crate::headless::use_index_logic;

#[component]
pub fn Index() -> Element {
    let logic = use_index_logic(None);

    rsx! {
        IndexUI { logic }
    }
}

#[component]
pub fn CollectionProducts(id: String) -> Element {
    let logic = use_index_logic(Some(CollectionId::new(id.clone())));

    // Follow route changes between collections once the list is loaded
    use_effect(use_reactive((&id,), move |(id,)| {
        if !(logic.loading_collections)() {
            logic.handle_view_collection_products(CollectionId::new(id));
        }
    }));

    rsx! {
        IndexUI { logic }
    }
}
