//! REST client for the hosted catalog backend.
//!
//! The backend exposes PostgREST-style endpoints under `/rest/v1`. Every
//! request carries the project's anon key both as `apikey` and as a bearer
//! token.

use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::BackendConfig;
use crate::error::{StoreError, StoreResult};
use crate::types::{Collection, CollectionId, Product, ProductId, ProductStatus};

const USER_AGENT: &str = concat!("shoepro/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Catalog backend client
#[derive(Clone, Debug)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl BackendClient {
    /// Creates a client for the configured backend.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> StoreResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, table: &str, query: &str) -> String {
        format!("{}/rest/v1/{}?{}", self.base_url, table, query)
    }

    async fn get_rows<T: DeserializeOwned>(&self, url: &str) -> StoreResult<Vec<T>> {
        debug!(%url, "Fetching catalog rows");

        let response = self
            .client
            .get(url)
            .header("apikey", &self.anon_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.anon_key))
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach catalog backend");
                StoreError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(status, response).await);
        }

        let rows = response.json::<Vec<T>>().await?;
        debug!(count = rows.len(), "Fetched catalog rows");
        Ok(rows)
    }

    /// Active collections ordered by name.
    pub async fn list_collections(&self) -> StoreResult<Vec<Collection>> {
        let url = self.endpoint("collections", "select=*&status=eq.active&order=name.asc");
        let rows: Vec<CollectionRow> = self.get_rows(&url).await?;
        Ok(rows.into_iter().map(Collection::from).collect())
    }

    /// Active products with their collection memberships.
    pub async fn list_products(&self) -> StoreResult<Vec<Product>> {
        let url = self.endpoint(
            "products",
            "select=*,product_collections(collection_id)&status=eq.active&order=created_at.desc",
        );
        let rows: Vec<ProductRow> = self.get_rows(&url).await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Active products that belong to `id`.
    pub async fn products_in_collection(&self, id: &CollectionId) -> StoreResult<Vec<Product>> {
        let url = self.endpoint(
            "products",
            &format!(
                "select=*,product_collections!inner(collection_id)&status=eq.active&product_collections.collection_id=eq.{}",
                id
            ),
        );
        let rows: Vec<ProductRow> = self.get_rows(&url).await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

async fn error_from_response(status: StatusCode, response: reqwest::Response) -> StoreError {
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unexpected response")
            .to_string(),
    };
    warn!(status = status.as_u16(), %message, "Catalog backend rejected request");
    StoreError::Backend {
        status: status.as_u16(),
        message,
    }
}

/// Collection row as returned by the backend
#[derive(Debug, Deserialize)]
struct CollectionRow {
    id: String,
    name: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    featured: Option<bool>,
}

impl From<CollectionRow> for Collection {
    fn from(row: CollectionRow) -> Self {
        Collection {
            id: CollectionId(row.id),
            name: row.name,
            image: row.image,
            description: row.description,
            featured: row.featured.unwrap_or(false),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MembershipRow {
    collection_id: String,
}

/// Product row as returned by the backend
///
/// Numeric columns arrive as JSON numbers that may carry a fraction.
#[derive(Debug, Deserialize)]
struct ProductRow {
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    price: f64,
    #[serde(default)]
    compare_at_price: Option<f64>,
    #[serde(default)]
    images: Option<Vec<String>>,
    #[serde(default)]
    featured: Option<bool>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    product_collections: Vec<MembershipRow>,
}

fn whole_units(amount: f64) -> u64 {
    if amount.is_finite() && amount > 0.0 {
        amount.round() as u64
    } else {
        0
    }
}

fn parse_status(status: Option<&str>) -> ProductStatus {
    match status {
        Some("draft") => ProductStatus::Draft,
        Some("archived") => ProductStatus::Archived,
        _ => ProductStatus::Active,
    }
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId(row.id),
            title: row.title,
            description: row.description,
            price: whole_units(row.price),
            compare_at_price: row.compare_at_price.map(whole_units),
            images: row.images.unwrap_or_default(),
            featured: row.featured.unwrap_or(false),
            status: parse_status(row.status.as_deref()),
            collection_ids: row
                .product_collections
                .into_iter()
                .map(|m| CollectionId(m.collection_id))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BackendClient {
        BackendClient::new(&BackendConfig {
            url: "https://demo.backend.example/".to_string(),
            anon_key: "anon".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let c = client();
        assert_eq!(c.base_url(), "https://demo.backend.example");
        assert_eq!(
            c.endpoint("collections", "select=*"),
            "https://demo.backend.example/rest/v1/collections?select=*"
        );
    }

    #[test]
    fn test_collection_row_null_featured() {
        let json = r#"{"id":"c1","name":"Botas","image":null,"featured":null}"#;
        let row: CollectionRow = serde_json::from_str(json).unwrap();
        let collection = Collection::from(row);
        assert!(!collection.featured);
        assert!(collection.image.is_none());
    }

    #[test]
    fn test_product_row_conversion() {
        let json = r#"{
            "id": "p1",
            "title": "Runner Pro",
            "price": 249999.6,
            "compare_at_price": 300000,
            "images": ["https://cdn.example/p1.jpg"],
            "status": "active",
            "product_collections": [{"collection_id": "deportivos"}]
        }"#;
        let row: ProductRow = serde_json::from_str(json).unwrap();
        let product = Product::from(row);
        assert_eq!(product.price, 250_000);
        assert_eq!(product.compare_at_price, Some(300_000));
        assert_eq!(product.collection_ids, vec![CollectionId::from("deportivos")]);
        assert!(product.is_active());
    }

    #[test]
    fn test_product_row_null_images_and_negative_price() {
        let json = r#"{"id":"p2","title":"X","price":-5,"images":null,"status":"archived"}"#;
        let row: ProductRow = serde_json::from_str(json).unwrap();
        let product = Product::from(row);
        assert_eq!(product.price, 0);
        assert!(product.images.is_empty());
        assert_eq!(product.status, ProductStatus::Archived);
    }
}
