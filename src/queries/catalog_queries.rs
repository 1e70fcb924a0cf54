use std::cmp::Reverse;

use crate::{
    catalog::Catalog,
    models::{Product, ProductQuery, SortBy},
};

pub const DEFAULT_SIMILAR_LIMIT: usize = 4;

const ALL_FILTER: &str = "all";

pub fn find_by_id(catalog: &Catalog, id: i32) -> Option<&Product> {
    catalog.products.iter().find(|p| p.id == id)
}

/// All products whose category or subcategory contains the identifier,
/// case-insensitively, in collection order.
pub fn products_by_category<'a>(catalog: &'a Catalog, category_id: &str) -> Vec<&'a Product> {
    catalog
        .products
        .iter()
        .filter(|p| p.matches_category(category_id))
        .collect()
}

/// Free-text search over name, description, tags, category and subcategory.
pub fn search_products<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Product> {
    catalog
        .products
        .iter()
        .filter(|p| p.matches_text(query))
        .collect()
}

/// Up to `limit` other products sharing the source product's category, in
/// collection order. An unknown id yields an empty result, not an error.
pub fn similar_products(catalog: &Catalog, product_id: i32, limit: usize) -> Vec<&Product> {
    let Some(source) = find_by_id(catalog, product_id) else {
        return Vec::new();
    };

    catalog
        .products
        .iter()
        .filter(|p| p.id != product_id && p.category == source.category)
        .take(limit)
        .collect()
}

/// Filter steps run in a fixed order: free-text search seed, category,
/// subcategory, price bounds, stock toggle, then sort.
pub fn filter_and_sort<'a>(catalog: &'a Catalog, params: &ProductQuery) -> Vec<&'a Product> {
    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty());

    let mut items: Vec<&Product> = match query {
        Some(q) => search_products(catalog, q),
        None => catalog.products.iter().collect(),
    };

    // Unlike the category lookup, this step inspects the category field
    // alone; subcategory has its own step below.
    if let Some(ref category) = params.category {
        if !category.eq_ignore_ascii_case(ALL_FILTER) {
            let needle = category.to_lowercase();
            items.retain(|p| p.category.to_lowercase().contains(&needle));
        }
    }

    if let Some(ref subcategory) = params.subcategory {
        if !subcategory.eq_ignore_ascii_case(ALL_FILTER) {
            let needle = subcategory.to_lowercase();
            items.retain(|p| {
                p.subcategory
                    .as_ref()
                    .is_some_and(|s| s.to_lowercase().contains(&needle))
            });
        }
    }

    if let Some(min) = params.price_from {
        items.retain(|p| p.price >= min);
    }

    if let Some(max) = params.price_to {
        items.retain(|p| p.price <= max);
    }

    if params.in_stock {
        items.retain(|p| p.in_stock);
    }

    sort_products(&mut items, params.sort_by);

    items
}

fn sort_products(items: &mut [&Product], sort_by: SortBy) {
    match sort_by {
        SortBy::PriceAsc => items.sort_by_key(|p| p.price),
        SortBy::PriceDesc => items.sort_by_key(|p| Reverse(p.price)),
        SortBy::Rating => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
        // Popular items first, ties by review count; the sort is stable so
        // remaining ties keep collection order.
        SortBy::Popular => items.sort_by(|a, b| {
            b.is_popular
                .cmp(&a.is_popular)
                .then(b.review_count.cmp(&a.review_count))
        }),
    }
}

/// Catalog slice for one merchant, matched on the exact store name.
pub fn store_products(catalog: &Catalog, store: &str) -> Vec<Product> {
    catalog
        .products
        .iter()
        .filter(|p| p.store == store)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Catalog {
        Catalog::load().unwrap()
    }

    #[test]
    fn search_matches_any_text_field() {
        let catalog = fixture();

        for product in search_products(&catalog, "riz") {
            let q = "riz";
            assert!(
                product.name.to_lowercase().contains(q)
                    || product.description.to_lowercase().contains(q)
                    || product.tags.iter().any(|t| t.to_lowercase().contains(q))
                    || product.category.to_lowercase().contains(q)
                    || product
                        .subcategory
                        .as_ref()
                        .is_some_and(|s| s.to_lowercase().contains(q))
            );
        }

        // Tag-only match: "premium" appears in id 1's tags.
        assert!(search_products(&catalog, "PREMIUM").iter().any(|p| p.id == 1));
        assert!(search_products(&catalog, "zzzz-aucun").is_empty());
    }

    #[test]
    fn category_lookup_is_substring_and_case_insensitive() {
        let catalog = fixture();

        let hits = products_by_category(&catalog, "ALIMENTAIRE");
        assert_eq!(hits.len(), 5);
        assert!(hits.iter().all(|p| p.matches_category("alimentaire")));

        // Subcategory matches count too.
        let cereales = products_by_category(&catalog, "céréales");
        assert_eq!(cereales.len(), 2);

        assert!(products_by_category(&catalog, "inexistante").is_empty());
    }

    #[test]
    fn similar_products_share_category_and_exclude_source() {
        let catalog = fixture();

        let similar = similar_products(&catalog, 1, DEFAULT_SIMILAR_LIMIT);
        assert_eq!(similar.len(), 4);
        assert!(similar.iter().all(|p| p.id != 1));
        assert!(similar.iter().all(|p| p.category == "Alimentaire"));

        assert_eq!(similar_products(&catalog, 1, 2).len(), 2);
        assert!(similar_products(&catalog, 9999, 4).is_empty());
    }

    #[test]
    fn price_bounds_are_inclusive_and_optional() {
        let catalog = fixture();

        let params = ProductQuery {
            price_from: Some(4500),
            price_to: Some(12500),
            ..Default::default()
        };
        let items = filter_and_sort(&catalog, &params);
        assert!(!items.is_empty());
        assert!(items.iter().all(|p| p.price >= 4500 && p.price <= 12500));
        // Boundary values survive the filter.
        assert!(items.iter().any(|p| p.price == 4500));
        assert!(items.iter().any(|p| p.price == 12500));

        let unbounded = filter_and_sort(&catalog, &ProductQuery::default());
        assert_eq!(unbounded.len(), catalog.products.len());
    }

    #[test]
    fn price_sorts_reverse_each_other() {
        let catalog = fixture();

        let asc = filter_and_sort(
            &catalog,
            &ProductQuery {
                sort_by: SortBy::PriceAsc,
                ..Default::default()
            },
        );
        let desc = filter_and_sort(
            &catalog,
            &ProductQuery {
                sort_by: SortBy::PriceDesc,
                ..Default::default()
            },
        );

        let asc_prices: Vec<i64> = asc.iter().map(|p| p.price).collect();
        let mut desc_prices: Vec<i64> = desc.iter().map(|p| p.price).collect();
        desc_prices.reverse();
        assert_eq!(asc_prices, desc_prices);
        assert!(asc_prices.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn popular_sort_partitions_then_orders_by_reviews() {
        let catalog = fixture();

        let items = filter_and_sort(&catalog, &ProductQuery::default());

        let first_regular = items
            .iter()
            .position(|p| !p.is_popular)
            .expect("fixture has non-popular products");
        assert!(items[..first_regular].iter().all(|p| p.is_popular));
        assert!(items[first_regular..].iter().all(|p| !p.is_popular));

        for group in [&items[..first_regular], &items[first_regular..]] {
            assert!(group.windows(2).all(|w| w[0].review_count >= w[1].review_count));
        }
    }

    #[test]
    fn composition_applies_all_criteria() {
        let catalog = fixture();

        let params = ProductQuery {
            q: Some("sac".to_string()),
            category: Some("alimentaire".to_string()),
            in_stock: true,
            sort_by: SortBy::PriceAsc,
            ..Default::default()
        };
        let items = filter_and_sort(&catalog, &params);

        assert!(!items.is_empty());
        assert!(items.iter().all(|p| p.in_stock));
        assert!(items.iter().all(|p| p.matches_category("alimentaire")));
        assert!(items.iter().all(|p| p.matches_text("sac")));

        // "all" disables the category filter instead of matching nothing.
        let all = filter_and_sort(
            &catalog,
            &ProductQuery {
                category: Some("all".to_string()),
                subcategory: Some("all".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(all.len(), catalog.products.len());
    }

    #[test]
    fn category_filter_ignores_subcategory_matches() {
        let catalog = fixture();

        // "céréales" exists only as a subcategory. The category lookup
        // finds it, the composition's category step must not.
        assert_eq!(products_by_category(&catalog, "céréales").len(), 2);

        let params = ProductQuery {
            category: Some("céréales".to_string()),
            ..Default::default()
        };
        assert!(filter_and_sort(&catalog, &params).is_empty());

        // The subcategory step is the one that narrows to it.
        let params = ProductQuery {
            category: Some("alimentaire".to_string()),
            subcategory: Some("céréales".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_and_sort(&catalog, &params).len(), 2);
    }

    #[test]
    fn name_sort_is_lexicographic() {
        let catalog = fixture();

        let items = filter_and_sort(
            &catalog,
            &ProductQuery {
                sort_by: SortBy::Name,
                ..Default::default()
            },
        );
        assert!(items.windows(2).all(|w| w[0].name <= w[1].name));
    }

    #[test]
    fn store_slice_matches_exact_name() {
        let catalog = fixture();

        let slice = store_products(&catalog, "Linka Tech Store");
        assert_eq!(slice.len(), 3);
        assert!(slice.iter().all(|p| p.store == "Linka Tech Store"));

        assert!(store_products(&catalog, "linka tech store").is_empty());
    }
}
