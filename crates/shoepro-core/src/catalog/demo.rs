//! Bundled demo catalog used when no backend is configured.

use serde::Deserialize;

use crate::error::StoreResult;
use crate::types::{Collection, CollectionId, Product};

const DEMO_CATALOG_JSON: &str = include_str!("../../data/demo_catalog.json");

/// In-memory catalog
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoCatalog {
    #[serde(default)]
    collections: Vec<Collection>,
    #[serde(default)]
    products: Vec<Product>,
}

impl DemoCatalog {
    /// Load the catalog shipped with the crate.
    pub fn bundled() -> StoreResult<Self> {
        Self::from_json(DEMO_CATALOG_JSON)
    }

    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn new(collections: Vec<Collection>, products: Vec<Product>) -> Self {
        Self {
            collections,
            products,
        }
    }

    pub fn collections(&self) -> Vec<Collection> {
        self.collections.clone()
    }

    /// Active products only, like the hosted backend.
    pub fn products(&self) -> Vec<Product> {
        self.products.iter().filter(|p| p.is_active()).cloned().collect()
    }

    pub fn products_in_collection(&self, id: &CollectionId) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.is_active() && p.in_collection(id))
            .cloned()
            .collect()
    }
}
