//! Core catalog types for the ShoePro storefront

use serde::{Deserialize, Serialize};

/// Unique identifier for a collection
///
/// Wraps the backend's row id (a UUID string) so collection and product
/// ids cannot be mixed up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionId(pub String);

impl CollectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CollectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CollectionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Unique identifier for a product
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A named grouping of products shown on the landing page
///
/// Collections are read-only from the storefront's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    /// Cover image URL
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Featured collections get the "Destacado" badge
    #[serde(default)]
    pub featured: bool,
}

impl Collection {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: CollectionId::new(id),
            name: name.into(),
            image: None,
            description: None,
            featured: false,
        }
    }

    /// Image URL, ignoring blank strings coming from the backend
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Description, ignoring blank strings coming from the backend
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }
}

/// Publication state of a product
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Draft,
    Archived,
}

/// A product listed in the storefront
///
/// Prices are whole units of the store currency (pesos have no cents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: u64,
    /// Original price when the product is discounted
    #[serde(default)]
    pub compare_at_price: Option<u64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: ProductStatus,
    /// Collections this product belongs to
    #[serde(default)]
    pub collection_ids: Vec<CollectionId>,
}

impl Product {
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: u64) -> Self {
        Self {
            id: ProductId::new(id),
            title: title.into(),
            description: None,
            price,
            compare_at_price: None,
            images: Vec::new(),
            featured: false,
            status: ProductStatus::Active,
            collection_ids: Vec::new(),
        }
    }

    /// First image, if any
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .iter()
            .map(String::as_str)
            .find(|url| !url.trim().is_empty())
    }

    /// Whether the product has a higher compare-at price
    pub fn is_on_sale(&self) -> bool {
        matches!(self.compare_at_price, Some(original) if original > self.price)
    }

    /// Discount relative to the compare-at price, rounded down
    pub fn discount_percent(&self) -> Option<u8> {
        match self.compare_at_price {
            Some(original) if original > self.price => {
                // Widened so large backend prices cannot overflow
                let off = u128::from(original - self.price) * 100 / u128::from(original);
                Some(off as u8)
            }
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }

    pub fn in_collection(&self, id: &CollectionId) -> bool {
        self.collection_ids.iter().any(|c| c == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_blank_image_is_none() {
        let mut collection = Collection::new("c1", "Running");
        collection.image = Some("   ".to_string());
        assert_eq!(collection.image_url(), None);

        collection.image = Some("https://cdn.example/run.jpg".to_string());
        assert_eq!(collection.image_url(), Some("https://cdn.example/run.jpg"));
    }

    #[test]
    fn test_collection_deserialize_defaults() {
        let json = r#"{"id":"c1","name":"Botas"}"#;
        let collection: Collection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.id, CollectionId::from("c1"));
        assert!(!collection.featured);
        assert!(collection.image.is_none());
        assert!(collection.description.is_none());
    }

    #[test]
    fn test_product_on_sale() {
        let mut product = Product::new("p1", "Runner X", 200_000);
        assert!(!product.is_on_sale());
        assert_eq!(product.discount_percent(), None);

        product.compare_at_price = Some(250_000);
        assert!(product.is_on_sale());
        assert_eq!(product.discount_percent(), Some(20));
    }

    #[test]
    fn test_product_compare_at_not_higher_is_not_sale() {
        let mut product = Product::new("p1", "Runner X", 200_000);
        product.compare_at_price = Some(200_000);
        assert!(!product.is_on_sale());
        assert_eq!(product.discount_percent(), None);
    }

    #[test]
    fn test_product_status_serde() {
        let json = r#"{"id":"p1","title":"T","price":1,"status":"draft"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.status, ProductStatus::Draft);
        assert!(!product.is_active());
    }

    #[test]
    fn test_primary_image_skips_blank() {
        let mut product = Product::new("p1", "T", 1);
        product.images = vec!["".to_string(), "https://cdn.example/a.jpg".to_string()];
        assert_eq!(product.primary_image(), Some("https://cdn.example/a.jpg"));
    }

    #[test]
    fn test_discount_percent_huge_prices_do_not_overflow() {
        let mut product = Product::new("p", "Free", 0);
        product.compare_at_price = Some(u64::MAX / 10);
        assert_eq!(product.discount_percent(), Some(100));

        product.price = u64::MAX / 20;
        assert_eq!(product.discount_percent(), Some(50));
    }
}
