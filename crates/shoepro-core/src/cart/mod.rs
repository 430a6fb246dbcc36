//! Shopping cart model.
//!
//! The cart is a list of lines, one per product. Adding a product that is
//! already in the cart bumps the quantity of its line.

mod store;

pub use store::CartStore;

use serde::{Deserialize, Serialize};

use crate::types::{Product, ProductId};

/// Largest count the header badge shows before collapsing to "99+"
pub const BADGE_MAX: u32 = 99;

/// Label for the cart badge, `None` when the cart is empty.
pub fn badge_label(total_items: u32) -> Option<String> {
    match total_items {
        0 => None,
        n if n > BADGE_MAX => Some(format!("{BADGE_MAX}+")),
        n => Some(n.to_string()),
    }
}

/// One product line in the cart
///
/// Title, price and image are captured when the line is created so the
/// cart renders without another catalog round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub title: String,
    pub price: u64,
    #[serde(default)]
    pub image: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            image: product.primary_image().map(str::to_string),
            quantity,
        }
    }

    pub fn line_total(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Shopping cart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product_id == id)
    }

    /// Add `quantity` units of `product`. Zero is a no-op.
    pub fn add_product(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|i| i.product_id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.items.push(CartItem::from_product(product, quantity)),
        }
    }

    /// Set the quantity of a line. Zero removes the line.
    ///
    /// Returns `false` when the product is not in the cart.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(id);
        }
        match self.items.iter_mut().find(|i| &i.product_id == id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove a line. Returns `false` when the product is not in the cart.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| &i.product_id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total units across all lines
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.quantity))
    }

    pub fn subtotal(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, i| acc.saturating_add(i.line_total()))
    }

    /// Amount left before shipping becomes free, `None` once reached.
    pub fn remaining_for_free_shipping(&self, threshold: u64) -> Option<u64> {
        let subtotal = self.subtotal();
        (subtotal < threshold).then(|| threshold - subtotal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: u64) -> Product {
        Product::new(id, format!("Zapato {id}"), price)
    }

    #[test]
    fn test_badge_label() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(1).as_deref(), Some("1"));
        assert_eq!(badge_label(99).as_deref(), Some("99"));
        assert_eq!(badge_label(100).as_deref(), Some("99+"));
        assert_eq!(badge_label(u32::MAX).as_deref(), Some("99+"));
    }

    #[test]
    fn test_add_merges_lines() {
        let mut cart = Cart::new();
        let p = product("a", 100);
        cart.add_product(&p, 1);
        cart.add_product(&p, 2);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.subtotal(), 300);
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mut cart = Cart::new();
        cart.add_product(&product("a", 100), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        let p = product("a", 100);
        cart.add_product(&p, 2);
        assert!(cart.set_quantity(&p.id, 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown() {
        let mut cart = Cart::new();
        assert!(!cart.set_quantity(&ProductId::from("nope"), 3));
        assert!(!cart.remove(&ProductId::from("nope")));
    }

    #[test]
    fn test_free_shipping_remaining() {
        let mut cart = Cart::new();
        cart.add_product(&product("a", 100_000), 1);
        assert_eq!(cart.remaining_for_free_shipping(150_000), Some(50_000));
        cart.add_product(&product("b", 60_000), 1);
        assert_eq!(cart.remaining_for_free_shipping(150_000), None);
    }

    #[test]
    fn test_item_captures_primary_image() {
        let mut p = product("a", 10);
        p.images = vec!["https://cdn.example/a.jpg".to_string()];
        let line = CartItem::from_product(&p, 1);
        assert_eq!(line.image.as_deref(), Some("https://cdn.example/a.jpg"));
    }
}
