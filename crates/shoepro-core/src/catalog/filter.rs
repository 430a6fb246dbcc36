//! Product filtering for the landing page grid.

use crate::types::{CollectionId, Product};

/// Whether `product` matches a search term.
///
/// The term is trimmed and compared case-insensitively against the title
/// and description. An empty term matches everything.
pub fn matches_search(product: &Product, search_term: &str) -> bool {
    let needle = search_term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    product.title.to_lowercase().contains(&needle)
        || product
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle))
}

/// Products visible in the grid for the current search and selection.
///
/// Only active products are listed. Input order is preserved.
pub fn filter_products(
    products: &[Product],
    search_term: &str,
    selected: Option<&CollectionId>,
) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.is_active())
        .filter(|p| selected.map_or(true, |id| p.in_collection(id)))
        .filter(|p| matches_search(p, search_term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductStatus;

    fn sample() -> Vec<Product> {
        let mut runner = Product::new("p1", "Runner Pro", 250_000);
        runner.description = Some("Zapatilla de running ligera".to_string());
        runner.collection_ids = vec![CollectionId::from("deportivos")];

        let mut boot = Product::new("p2", "Bota Andina", 320_000);
        boot.collection_ids = vec![CollectionId::from("botas")];

        let mut draft = Product::new("p3", "Runner Beta", 100_000);
        draft.status = ProductStatus::Draft;
        draft.collection_ids = vec![CollectionId::from("deportivos")];

        vec![runner, boot, draft]
    }

    #[test]
    fn test_empty_search_lists_active_products() {
        let result = filter_products(&sample(), "", None);
        let ids: Vec<_> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let result = filter_products(&sample(), "  RUNNER ", None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "p1");
    }

    #[test]
    fn test_search_matches_description() {
        let result = filter_products(&sample(), "ligera", None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "p1");
    }

    #[test]
    fn test_selected_collection_restricts_results() {
        let botas = CollectionId::from("botas");
        let result = filter_products(&sample(), "", Some(&botas));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "p2");
    }

    #[test]
    fn test_search_and_collection_combine() {
        let botas = CollectionId::from("botas");
        assert!(filter_products(&sample(), "runner", Some(&botas)).is_empty());
    }
}
