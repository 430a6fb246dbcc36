//! Catalog access: collections and products.
//!
//! The storefront reads its catalog either from the hosted backend
//! ([`BackendClient`]) or, when no backend is configured, from the demo
//! catalog bundled with the crate ([`DemoCatalog`]).

mod demo;
mod filter;
mod remote;

pub use demo::DemoCatalog;
pub use filter::{filter_products, matches_search};
pub use remote::BackendClient;

use tracing::info;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::types::{Collection, CollectionId, Product, ProductId};

/// Source of catalog data
#[derive(Clone, Debug)]
pub enum Catalog {
    Remote(BackendClient),
    Demo(DemoCatalog),
}

impl Catalog {
    /// Pick the backend from configuration.
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        match &config.backend {
            Some(backend) => {
                info!(url = %backend.url, "Using hosted catalog backend");
                Ok(Catalog::Remote(BackendClient::new(backend)?))
            }
            None => {
                info!("No backend configured, using bundled demo catalog");
                Ok(Catalog::Demo(DemoCatalog::bundled()?))
            }
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Catalog::Demo(_))
    }

    pub async fn list_collections(&self) -> StoreResult<Vec<Collection>> {
        match self {
            Catalog::Remote(client) => client.list_collections().await,
            Catalog::Demo(demo) => Ok(demo.collections()),
        }
    }

    pub async fn list_products(&self) -> StoreResult<Vec<Product>> {
        match self {
            Catalog::Remote(client) => client.list_products().await,
            Catalog::Demo(demo) => Ok(demo.products()),
        }
    }

    pub async fn products_in_collection(&self, id: &CollectionId) -> StoreResult<Vec<Product>> {
        match self {
            Catalog::Remote(client) => client.products_in_collection(id).await,
            Catalog::Demo(demo) => Ok(demo.products_in_collection(id)),
        }
    }

    /// Look up one product by id.
    pub async fn find_product(&self, id: &ProductId) -> StoreResult<Product> {
        self.list_products()
            .await?
            .into_iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| StoreError::ProductNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_config_uses_demo() {
        let catalog = Catalog::from_config(&StoreConfig::default()).unwrap();
        assert!(catalog.is_demo());
        assert!(!catalog.list_collections().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_demo_products_in_collection() {
        let catalog = Catalog::Demo(DemoCatalog::bundled().unwrap());
        let botas = catalog
            .products_in_collection(&CollectionId::from("botas"))
            .await
            .unwrap();
        assert!(!botas.is_empty());
        assert!(botas.iter().all(|p| p.in_collection(&CollectionId::from("botas"))));
    }

    #[tokio::test]
    async fn test_find_unknown_product() {
        let catalog = Catalog::Demo(DemoCatalog::default());
        let err = catalog
            .find_product(&ProductId::from("missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ProductNotFound(_)));
    }
}
