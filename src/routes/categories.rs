use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    models::{CategoryResponse, Product},
    queries::catalog_queries,
};

pub async fn get_all_categories(State(state): State<AppState>) -> Json<Vec<CategoryResponse>> {
    let response: Vec<CategoryResponse> = state
        .catalog
        .categories
        .iter()
        .map(|category| CategoryResponse {
            id: category.id.clone(),
            name: category.name.clone(),
            icon: category.icon.clone(),
            // Computed from the actual collection, not the editorial number
            // carried by the data file.
            product_count: state.catalog.product_count(&category.id),
            subcategories: category.subcategories.clone(),
        })
        .collect();

    Json(response)
}

/// All products under a category identifier; an unknown identifier yields
/// an empty list, not an error.
pub async fn get_category_products(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<Product>> {
    let products = catalog_queries::products_by_category(&state.catalog, &id);

    Json(products.into_iter().cloned().collect())
}
