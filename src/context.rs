//! Shared storefront context.
//!
//! Provides the catalog, the cart and the cart drawer state to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! provide_store_context(catalog, config, cart_store);
//!
//! // In child components
//! let mut cart = use_cart();
//! cart.write().add_product(&product, 1);
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use parking_lot::Mutex;
use shoepro_core::{Cart, CartStore, Catalog, StoreConfig, StoreResult};

/// Open/closed state of the floating cart
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CartUi {
    pub open: bool,
}

impl CartUi {
    pub fn open_cart(&mut self) {
        self.open = true;
    }

    pub fn close_cart(&mut self) {
        self.open = false;
    }
}

/// Decides which cart snapshots need writing and hands out save jobs.
///
/// Lives on the UI thread. Snapshots equal to the last requested one
/// (including the cart just loaded at startup) produce no job.
pub struct CartSaver {
    store: Option<CartStore>,
    last_requested: Cart,
    generation: u64,
    written: Arc<Mutex<u64>>,
}

impl CartSaver {
    pub fn new(store: Option<CartStore>, loaded: Cart) -> Self {
        Self {
            store,
            last_requested: loaded,
            generation: 0,
            written: Arc::new(Mutex::new(0)),
        }
    }

    /// Save job for `snapshot`, or `None` when nothing changed or there is
    /// no store.
    pub fn request(&mut self, snapshot: &Cart) -> Option<SaveJob> {
        let store = self.store.clone()?;
        if *snapshot == self.last_requested {
            return None;
        }
        self.last_requested = snapshot.clone();
        self.generation += 1;
        Some(SaveJob {
            store,
            cart: snapshot.clone(),
            generation: self.generation,
            written: Arc::clone(&self.written),
        })
    }
}

/// One cart write, run on a blocking thread.
pub struct SaveJob {
    store: CartStore,
    cart: Cart,
    generation: u64,
    written: Arc<Mutex<u64>>,
}

impl SaveJob {
    /// Write the snapshot unless a newer one is already on disk.
    ///
    /// Returns whether the store was written.
    pub fn run(self) -> StoreResult<bool> {
        let mut written = self.written.lock();
        if self.generation <= *written {
            return Ok(false);
        }
        self.store.save(&self.cart)?;
        *written = self.generation;
        Ok(true)
    }
}

fn load_cart(store: Option<&CartStore>) -> Cart {
    store
        .and_then(|store| match store.load() {
            Ok(cart) => Some(cart),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load saved cart");
                None
            }
        })
        .unwrap_or_default()
}

/// Install the storefront contexts. Call once, in the root component.
///
/// The cart starts from what the store holds. Later changes are written
/// back on a blocking thread.
pub fn provide_store_context(catalog: Catalog, config: StoreConfig, cart_store: Option<CartStore>) {
    let loaded = use_hook(|| load_cart(cart_store.as_ref()));
    let saver = use_hook(|| Rc::new(RefCell::new(CartSaver::new(cart_store, loaded.clone()))));
    let cart = use_signal(move || loaded);
    let cart_ui = use_signal(CartUi::default);

    use_context_provider(|| catalog);
    use_context_provider(|| config);
    use_context_provider(|| cart);
    use_context_provider(|| cart_ui);

    // Persist cart changes
    use_effect(move || {
        let snapshot = cart.read().clone();
        let Some(job) = saver.borrow_mut().request(&snapshot) else {
            return;
        };
        spawn(async move {
            match tokio::task::spawn_blocking(move || job.run()).await {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => tracing::error!(error = %e, "Failed to save cart"),
                Err(e) => tracing::error!(error = %e, "Cart save task failed"),
            }
        });
    });
}

/// Hook to access the catalog backend.
pub fn use_catalog() -> Catalog {
    use_context::<Catalog>()
}

/// Hook to access the effective configuration.
pub fn use_store_config() -> StoreConfig {
    use_context::<StoreConfig>()
}

/// Hook to access the shared cart.
pub fn use_cart() -> Signal<Cart> {
    use_context::<Signal<Cart>>()
}

/// Hook to access the floating cart open/close state.
pub fn use_cart_ui() -> Signal<CartUi> {
    use_context::<Signal<CartUi>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_ui_starts_closed() {
        let mut ui = CartUi::default();
        assert!(!ui.open);
        ui.open_cart();
        assert!(ui.open);
        ui.close_cart();
        assert!(!ui.open);
    }

    fn cart_with(id: &str, qty: u32) -> Cart {
        let mut cart = Cart::new();
        cart.add_product(&shoepro_core::Product::new(id, id, 1000), qty);
        cart
    }

    fn saver(dir: &tempfile::TempDir, loaded: Cart) -> (CartStore, CartSaver) {
        let store = CartStore::in_data_dir(dir.path()).unwrap();
        (store.clone(), CartSaver::new(Some(store), loaded))
    }

    #[test]
    fn loaded_cart_is_not_saved_again() {
        let dir = tempfile::TempDir::new().unwrap();
        let loaded = cart_with("runner-pro", 1);
        let (_, mut saver) = saver(&dir, loaded.clone());
        assert!(saver.request(&loaded).is_none());
    }

    #[test]
    fn changed_cart_is_saved_once() {
        let dir = tempfile::TempDir::new().unwrap();
        let (store, mut saver) = saver(&dir, Cart::new());

        let changed = cart_with("runner-pro", 2);
        let job = saver.request(&changed).unwrap();
        assert!(saver.request(&changed).is_none());

        assert!(job.run().unwrap());
        assert_eq!(store.load().unwrap(), changed);
    }

    #[test]
    fn stale_save_does_not_overwrite_newer_cart() {
        let dir = tempfile::TempDir::new().unwrap();
        let (store, mut saver) = saver(&dir, Cart::new());

        let older = saver.request(&cart_with("runner-pro", 1)).unwrap();
        let newest = cart_with("runner-pro", 3);
        let newer = saver.request(&newest).unwrap();

        assert!(newer.run().unwrap());
        assert!(!older.run().unwrap());
        assert_eq!(store.load().unwrap(), newest);
    }

    #[test]
    fn no_store_means_no_jobs() {
        let mut saver = CartSaver::new(None, Cart::new());
        assert!(saver.request(&cart_with("runner-pro", 1)).is_none());
    }
}
