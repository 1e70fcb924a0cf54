use std::cmp::Reverse;
use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    error::Result,
    models::{InventoryItem, InventoryMetrics, InventoryQuery, InventorySort, Product, StockFilter},
};

pub const LOW_STOCK_THRESHOLD: i32 = 10;

pub async fn find_metrics_by_product_ids(
    pool: &PgPool,
    product_ids: &[i32],
) -> Result<HashMap<i32, InventoryMetrics>> {
    if product_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = sqlx::query_as::<_, InventoryMetrics>(
        "SELECT * FROM inventory_metrics WHERE product_id = ANY($1)",
    )
    .bind(product_ids)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|m| (m.product_id, m)).collect())
}

/// Joins a merchant's catalog slice with its stored metrics. A product
/// without a metrics row counts as zero stock.
pub fn build_items(
    products: Vec<Product>,
    mut metrics: HashMap<i32, InventoryMetrics>,
) -> Vec<InventoryItem> {
    products
        .into_iter()
        .map(|product| match metrics.remove(&product.id) {
            Some(m) => InventoryItem {
                product,
                stock_quantity: m.stock_quantity,
                sales: m.sales,
                views: m.views,
                created_at: Some(m.created_at),
            },
            None => InventoryItem {
                product,
                stock_quantity: 0,
                sales: 0,
                views: 0,
                created_at: None,
            },
        })
        .collect()
}

/// Same composition contract as the catalog view, in the same step order,
/// extended with stock predicates and metric sort keys.
pub fn filter_and_sort(mut items: Vec<InventoryItem>, params: &InventoryQuery) -> Vec<InventoryItem> {
    if let Some(q) = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        items.retain(|i| i.product.matches_text(q));
    }

    if let Some(ref category) = params.category {
        if !category.eq_ignore_ascii_case("all") {
            let needle = category.to_lowercase();
            items.retain(|i| i.product.category.to_lowercase().contains(&needle));
        }
    }

    if let Some(ref subcategory) = params.subcategory {
        if !subcategory.eq_ignore_ascii_case("all") {
            let needle = subcategory.to_lowercase();
            items.retain(|i| {
                i.product
                    .subcategory
                    .as_ref()
                    .is_some_and(|s| s.to_lowercase().contains(&needle))
            });
        }
    }

    if let Some(min) = params.price_from {
        items.retain(|i| i.product.price >= min);
    }

    if let Some(max) = params.price_to {
        items.retain(|i| i.product.price <= max);
    }

    // The catalog flag toggle, distinct from the stock-quantity predicates.
    if params.in_stock {
        items.retain(|i| i.product.in_stock);
    }

    match params.status {
        StockFilter::All => {}
        StockFilter::InStock => items.retain(|i| i.stock_quantity > 0),
        StockFilter::OutOfStock => items.retain(|i| i.stock_quantity == 0),
        StockFilter::LowStock => items.retain(|i| i.stock_quantity < LOW_STOCK_THRESHOLD),
        StockFilter::Popular => items.retain(|i| i.product.is_popular),
        StockFilter::Featured => items.retain(|i| i.product.is_featured),
    }

    match params.sort_by {
        InventorySort::PriceAsc => items.sort_by_key(|i| i.product.price),
        InventorySort::PriceDesc => items.sort_by_key(|i| Reverse(i.product.price)),
        InventorySort::Rating => {
            items.sort_by(|a, b| b.product.rating.total_cmp(&a.product.rating))
        }
        InventorySort::Name => items.sort_by(|a, b| a.product.name.cmp(&b.product.name)),
        InventorySort::Popular => items.sort_by(|a, b| {
            b.product
                .is_popular
                .cmp(&a.product.is_popular)
                .then(b.product.review_count.cmp(&a.product.review_count))
        }),
        InventorySort::Stock => items.sort_by_key(|i| Reverse(i.stock_quantity)),
        InventorySort::Sales => items.sort_by_key(|i| Reverse(i.sales)),
        InventorySort::Views => items.sort_by_key(|i| Reverse(i.views)),
        InventorySort::Newest => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    items
}
