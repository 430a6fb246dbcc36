//! ShoePro Storefront Core Library
//!
//! Catalog access, product filtering, the shopping cart and configuration
//! for the ShoePro shoe store.
//!
//! ## Overview
//!
//! The storefront reads collections and products from a hosted backend
//! (PostgREST-style REST API) or, when none is configured, from a demo
//! catalog bundled with this crate. The cart lives on the client and is
//! persisted locally with redb.
//!
//! ## Quick Start
//!
//! ```ignore
//! use shoepro_core::{filter_products, Catalog, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoreConfig::default();
//!     let catalog = Catalog::from_config(&config)?;
//!
//!     let products = catalog.list_products().await?;
//!     for product in filter_products(&products, "runner", None) {
//!         println!("{}: {}", product.title, product.price);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod money;
pub mod types;

// Re-exports
pub use cart::{badge_label, Cart, CartItem, CartStore, BADGE_MAX};
pub use catalog::{filter_products, matches_search, BackendClient, Catalog, DemoCatalog};
pub use config::{default_data_dir, BackendConfig, LogLevel, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use money::format_price;
pub use types::*;
