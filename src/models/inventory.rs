use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Product;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct InventoryMetrics {
    pub product_id: i32,
    pub stock_quantity: i32,
    pub sales: i32,
    pub views: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A catalog product joined with its stored metrics. Products without a
/// metrics row count as zero stock.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(flatten)]
    pub product: Product,
    pub stock_quantity: i32,
    pub sales: i32,
    pub views: i32,
    pub created_at: Option<DateTime<Utc>>,
}

// Request types

/// Same inputs as the catalog composition, scoped to one store and
/// extended with a stock predicate.
#[derive(Debug, Default, Deserialize)]
pub struct InventoryQuery {
    pub store: String,
    pub q: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub price_from: Option<i64>,
    pub price_to: Option<i64>,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub status: StockFilter,
    #[serde(default)]
    pub sort_by: InventorySort,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockFilter {
    #[default]
    All,
    InStock,
    OutOfStock,
    LowStock,
    Popular,
    Featured,
}

/// The catalog sort keys plus the metric-backed ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InventorySort {
    PriceAsc,
    PriceDesc,
    Rating,
    Name,
    #[default]
    Popular,
    Stock,
    Sales,
    Views,
    Newest,
}
