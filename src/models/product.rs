use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub store: String,
    pub store_location: String,
    pub rating: f32,
    pub review_count: u32,
    pub in_stock: bool,
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub is_featured: bool,
    /// Editorial percentage, never derived from the price fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<i32>,
}

impl Product {
    /// Case-insensitive substring match against category or subcategory.
    pub fn matches_category(&self, category_id: &str) -> bool {
        let needle = category_id.to_lowercase();
        self.category.to_lowercase().contains(&needle)
            || self
                .subcategory
                .as_ref()
                .is_some_and(|s| s.to_lowercase().contains(&needle))
    }

    /// Case-insensitive substring match against name, description, tags,
    /// category and subcategory.
    pub fn matches_text(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            || self.category.to_lowercase().contains(&needle)
            || self
                .subcategory
                .as_ref()
                .is_some_and(|s| s.to_lowercase().contains(&needle))
    }
}

// Request types

#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub price_from: Option<i64>,
    pub price_to: Option<i64>,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub sort_by: SortBy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    PriceAsc,
    PriceDesc,
    Rating,
    Name,
    #[default]
    Popular,
}

#[derive(Debug, Deserialize)]
pub struct SimilarQuery {
    pub limit: Option<usize>,
}
