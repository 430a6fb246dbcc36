//! Landing page logic.
//!
//! [`use_index_logic`] loads collections and products once on mount and
//! returns an [`IndexLogic`] handle: the reactive state the landing page
//! renders plus the handlers it wires to its controls. `IndexUI` only
//! reads from it.

use dioxus::prelude::*;
use shoepro_core::{filter_products, Collection, CollectionId, Product};

use crate::context::use_catalog;

/// Landing page state and handlers
///
/// All fields are signals, so the handle is `Copy` and can be passed as a
/// prop.
#[derive(Clone, Copy, PartialEq)]
pub struct IndexLogic {
    pub collections: Signal<Vec<Collection>>,
    pub products: Signal<Vec<Product>>,
    pub loading: Signal<bool>,
    pub loading_collections: Signal<bool>,
    pub search_term: Signal<String>,
    pub selected_collection_id: Signal<Option<CollectionId>>,
    /// Products after search and collection filtering
    pub filtered_products: Memo<Vec<Product>>,
}

impl IndexLogic {
    /// Update the search term. Called on every keystroke.
    pub fn set_search_term(mut self, term: String) {
        self.search_term.set(term);
    }

    /// Show only the products of collection `id`.
    ///
    /// Ids that are not among the loaded collections are ignored.
    pub fn handle_view_collection_products(mut self, id: CollectionId) {
        match select_collection(&self.collections.read(), &id) {
            Some(id) => {
                tracing::debug!(collection = %id, "Viewing collection products");
                self.selected_collection_id.set(Some(id));
            }
            None => tracing::warn!(collection = %id, "Ignoring unknown collection"),
        }
    }

    /// Clear the collection selection.
    pub fn handle_show_all_products(mut self) {
        self.selected_collection_id.set(None);
    }
}

/// The id to select, if it names one of `collections`.
pub fn select_collection(collections: &[Collection], id: &CollectionId) -> Option<CollectionId> {
    collections
        .iter()
        .find(|c| &c.id == id)
        .map(|c| c.id.clone())
}

/// Create the landing page state and start loading the catalog.
///
/// `initial_collection` preselects a collection once collections arrive
/// (used by `/collections/:id`).
pub fn use_index_logic(initial_collection: Option<CollectionId>) -> IndexLogic {
    let catalog = use_catalog();

    let mut collections: Signal<Vec<Collection>> = use_signal(Vec::new);
    let mut products: Signal<Vec<Product>> = use_signal(Vec::new);
    let mut loading = use_signal(|| true);
    let mut loading_collections = use_signal(|| true);
    let search_term = use_signal(String::new);
    let mut selected_collection_id: Signal<Option<CollectionId>> = use_signal(|| None);

    let filtered_products = use_memo(move || {
        let selected = selected_collection_id.read().clone();
        filter_products(&products.read(), &search_term.read(), selected.as_ref())
    });

    // Load collections
    let collections_catalog = catalog.clone();
    use_effect(move || {
        let catalog = collections_catalog.clone();
        let initial = initial_collection.clone();
        spawn(async move {
            match catalog.list_collections().await {
                Ok(list) => {
                    tracing::info!(count = list.len(), "Loaded collections");
                    if let Some(id) = initial {
                        match select_collection(&list, &id) {
                            Some(id) => selected_collection_id.set(Some(id)),
                            None => tracing::warn!(collection = %id, "Requested collection not found"),
                        }
                    }
                    collections.set(list);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load collections");
                }
            }
            loading_collections.set(false);
        });
    });

    // Load products
    use_effect(move || {
        let catalog = catalog.clone();
        spawn(async move {
            match catalog.list_products().await {
                Ok(list) => {
                    tracing::info!(count = list.len(), "Loaded products");
                    products.set(list);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load products");
                }
            }
            loading.set(false);
        });
    });

    IndexLogic {
        collections,
        products,
        loading,
        loading_collections,
        search_term,
        selected_collection_id,
        filtered_products,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collections() -> Vec<Collection> {
        vec![Collection::new("botas", "Botas"), Collection::new("casuales", "Casuales")]
    }

    #[test]
    fn select_known_collection() {
        let id = CollectionId::from("botas");
        assert_eq!(select_collection(&collections(), &id), Some(id));
    }

    #[test]
    fn select_unknown_collection_is_rejected() {
        assert_eq!(
            select_collection(&collections(), &CollectionId::from("sandalias")),
            None
        );
    }

    #[test]
    fn select_from_empty_list_is_rejected() {
        assert_eq!(select_collection(&[], &CollectionId::from("botas")), None);
    }
}
