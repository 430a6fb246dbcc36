//! Persistent cart storage using redb.
//!
//! The cart survives restarts of both the desktop app and the CLI. It is
//! stored as a single JSON value under a fixed key.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use tracing::debug;

use super::Cart;
use crate::error::StoreError;

const CART_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("cart");
const CART_KEY: &str = "current";

/// File name of the cart database inside the data directory
pub const CART_DB_FILE: &str = "cart.redb";

/// Cart storage backed by redb
#[derive(Clone)]
pub struct CartStore {
    db: Arc<RwLock<Database>>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore").finish_non_exhaustive()
    }
}

impl PartialEq for CartStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.db, &other.db)
    }
}

impl CartStore {
    /// Open (or create) the cart database at `path`.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CART_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Open the cart database inside a data directory.
    pub fn in_data_dir(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::new(data_dir.as_ref().join(CART_DB_FILE))
    }

    /// Persist the cart, replacing what was stored.
    pub fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(CART_TABLE)?;
            let data = serde_json::to_vec(cart)?;
            table.insert(CART_KEY, data.as_slice())?;
        }
        write_txn.commit()?;
        debug!(lines = cart.items.len(), "Saved cart");
        Ok(())
    }

    /// Load the stored cart, or an empty one if nothing was saved yet.
    pub fn load(&self) -> Result<Cart, StoreError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(CART_TABLE)?;

        match table.get(CART_KEY)? {
            Some(v) => Ok(serde_json::from_slice(v.value())?),
            None => Ok(Cart::default()),
        }
    }

    /// Drop the stored cart.
    pub fn clear(&self) -> Result<(), StoreError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(CART_TABLE)?;
            table.remove(CART_KEY)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> CartStore {
        CartStore::in_data_dir(dir.path()).unwrap()
    }

    #[test]
    fn test_load_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store(&dir).load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let s = store(&dir);

        let mut cart = Cart::new();
        cart.add_product(&Product::new("runner-pro", "Runner Pro", 289_900), 2);
        s.save(&cart).unwrap();

        assert_eq!(s.load().unwrap(), cart);
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let mut cart = Cart::new();
        cart.add_product(&Product::new("bota-andina", "Bota Andina", 389_900), 1);

        {
            store(&dir).save(&cart).unwrap();
        }

        assert_eq!(store(&dir).load().unwrap().total_items(), 1);
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let s = store(&dir);
        let mut cart = Cart::new();
        cart.add_product(&Product::new("a", "A", 1), 1);
        s.save(&cart).unwrap();
        s.clear().unwrap();
        assert!(s.load().unwrap().is_empty());
    }

    #[test]
    fn test_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let s = CartStore::in_data_dir(&nested).unwrap();
        s.save(&Cart::new()).unwrap();
        assert!(nested.join(CART_DB_FILE).exists());
    }
}
