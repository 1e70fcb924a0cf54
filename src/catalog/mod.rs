use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    models::{Category, Product},
};

const CATALOG_DATA: &str = include_str!("data.json");

#[derive(Debug, Deserialize)]
struct CatalogData {
    products: Vec<Product>,
    categories: Vec<Category>,
}

/// Immutable product/category repository, loaded once at startup from the
/// embedded data file. Query functions take it as an explicit parameter.
#[derive(Debug)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    popular: Vec<Product>,
    featured: Vec<Product>,
    category_counts: HashMap<String, u32>,
}

impl Catalog {
    pub fn load() -> Result<Self> {
        Self::from_json(CATALOG_DATA)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(raw)
            .map_err(|e| AppError::CatalogError(format!("Invalid catalog data: {}", e)))?;

        Self::new(data.products, data.categories)
    }

    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(AppError::CatalogError(format!(
                    "Duplicate product id: {}",
                    product.id
                )));
            }
        }

        // Snapshots taken once; the collection never mutates afterwards.
        let popular = products.iter().filter(|p| p.is_popular).cloned().collect();
        let featured = products.iter().filter(|p| p.is_featured).cloned().collect();

        let category_counts = categories
            .iter()
            .map(|c| {
                let count = products.iter().filter(|p| p.matches_category(&c.id)).count();
                (c.id.clone(), count as u32)
            })
            .collect();

        Ok(Self {
            products,
            categories,
            popular,
            featured,
            category_counts,
        })
    }

    pub fn popular(&self) -> &[Product] {
        &self.popular
    }

    pub fn featured(&self) -> &[Product] {
        &self.featured
    }

    /// Actual number of catalog products matching the category, as opposed
    /// to the editorial `product_count` carried by the data file.
    pub fn product_count(&self, category_id: &str) -> u32 {
        self.category_counts.get(category_id).copied().unwrap_or(0)
    }
}
