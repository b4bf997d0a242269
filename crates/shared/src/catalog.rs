//! Fixed product catalog, defined at process start and never mutated.

use std::sync::OnceLock;

use crate::domain::{Price, Product, ProductId};

const ENTRIES: [(i64, &str, u64); 4] = [
    (1, "Wireless Headphones", 9999),
    (2, "Leather Backpack", 12999),
    (3, "Fitness Tracker", 7999),
    (4, "Smart Water Bottle", 4999),
];

static PRODUCTS: OnceLock<Vec<Product>> = OnceLock::new();

/// Catalog products in display order.
pub fn products() -> &'static [Product] {
    PRODUCTS.get_or_init(|| {
        ENTRIES
            .iter()
            .map(|&(id, title, cents)| Product {
                id: ProductId(id),
                title: title.to_string(),
                price: Price::from_cents(cents),
            })
            .collect()
    })
}

pub fn find(id: ProductId) -> Option<&'static Product> {
    products().iter().find(|product| product.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_keeps_fixed_order() {
        let titles: Vec<_> = products().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Wireless Headphones",
                "Leather Backpack",
                "Fitness Tracker",
                "Smart Water Bottle"
            ]
        );
    }

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<_> = products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products().len());
    }

    #[test]
    fn finds_products_by_id() {
        assert_eq!(
            find(ProductId(3)).map(|p| p.price.to_string()).as_deref(),
            Some("$79.99")
        );
        assert!(find(ProductId(99)).is_none());
    }
}
