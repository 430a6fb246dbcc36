//! Property-based tests for filtering and the cart
//!
//! Uses proptest to check invariants the storefront views rely on.

use proptest::prelude::*;
use shoepro_core::{badge_label, filter_products, Cart, CollectionId, Product, BADGE_MAX};

// ============================================================================
// Strategy Generators
// ============================================================================

fn title_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z ]{1,30}").expect("valid regex")
}

fn collection_strategy() -> impl Strategy<Value = CollectionId> {
    prop_oneof![
        Just(CollectionId::from("deportivos")),
        Just(CollectionId::from("botas")),
        Just(CollectionId::from("casuales")),
    ]
}

fn product_strategy() -> impl Strategy<Value = Product> {
    (
        "[a-z0-9]{4,8}",
        title_strategy(),
        1u64..1_000_000,
        prop::collection::vec(collection_strategy(), 0..3),
    )
        .prop_map(|(id, title, price, collections)| {
            let mut product = Product::new(id, title, price);
            product.collection_ids = collections;
            product
        })
}

/// Operations that can be performed on a cart
#[derive(Debug, Clone)]
enum CartOp {
    Add(usize, u32),
    SetQuantity(usize, u32),
    Remove(usize),
}

fn cart_ops_strategy() -> impl Strategy<Value = Vec<CartOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..5usize, 0..10u32).prop_map(|(i, q)| CartOp::Add(i, q)),
            1 => (0..5usize, 0..10u32).prop_map(|(i, q)| CartOp::SetQuantity(i, q)),
            1 => (0..5usize).prop_map(CartOp::Remove),
        ],
        0..40,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Filtering never invents products and keeps input order
    #[test]
    fn filter_is_ordered_subsequence(
        products in prop::collection::vec(product_strategy(), 0..20),
        term in "[a-zA-Z]{0,3}",
    ) {
        let result = filter_products(&products, &term, None);
        let mut cursor = products.iter();
        for kept in &result {
            prop_assert!(cursor.any(|p| p == kept));
        }
    }

    /// An empty search with no selection lists every active product
    #[test]
    fn empty_search_keeps_everything(products in prop::collection::vec(product_strategy(), 0..20)) {
        let result = filter_products(&products, "   ", None);
        prop_assert_eq!(result.len(), products.len());
    }

    /// With a collection selected, every result belongs to it
    #[test]
    fn selection_restricts_to_collection(
        products in prop::collection::vec(product_strategy(), 0..20),
        selected in collection_strategy(),
    ) {
        let result = filter_products(&products, "", Some(&selected));
        prop_assert!(result.iter().all(|p| p.in_collection(&selected)));
        let expected = products.iter().filter(|p| p.in_collection(&selected)).count();
        prop_assert_eq!(result.len(), expected);
    }

    /// Badge shows the exact count up to 99 and "99+" above
    #[test]
    fn badge_label_caps_at_99(total in 0u32..10_000) {
        let label = badge_label(total);
        if total == 0 {
            prop_assert!(label.is_none());
        } else if total <= BADGE_MAX {
            prop_assert_eq!(label, Some(total.to_string()));
        } else {
            prop_assert_eq!(label.as_deref(), Some("99+"));
        }
    }

    /// Total items always equals the sum of line quantities, and no line
    /// is ever stored with quantity zero
    #[test]
    fn cart_totals_stay_consistent(
        catalog in prop::collection::vec(product_strategy(), 5),
        ops in cart_ops_strategy(),
    ) {
        let mut cart = Cart::new();
        for op in ops {
            match op {
                CartOp::Add(i, q) => cart.add_product(&catalog[i], q),
                CartOp::SetQuantity(i, q) => { cart.set_quantity(&catalog[i].id, q); }
                CartOp::Remove(i) => { cart.remove(&catalog[i].id); }
            }
        }

        let sum: u32 = cart.items.iter().map(|i| i.quantity).sum();
        prop_assert_eq!(cart.total_items(), sum);
        prop_assert!(cart.items.iter().all(|i| i.quantity > 0));

        let subtotal: u64 = cart.items.iter().map(|i| i.price * u64::from(i.quantity)).sum();
        prop_assert_eq!(cart.subtotal(), subtotal);
    }
}
