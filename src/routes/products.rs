use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{Product, ProductQuery, SimilarQuery},
    queries::catalog_queries,
};

pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<ProductQuery>,
) -> Json<Vec<Product>> {
    let products = catalog_queries::filter_and_sort(&state.catalog, &params);

    Json(products.into_iter().cloned().collect())
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let product = catalog_queries::find_by_id(&state.catalog, id)
        .ok_or(AppError::NotFound("Produit introuvable".to_string()))?;

    Ok(Json(product.clone()))
}

pub async fn get_similar_products(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<SimilarQuery>,
) -> Json<Vec<Product>> {
    let limit = params
        .limit
        .unwrap_or(catalog_queries::DEFAULT_SIMILAR_LIMIT);
    let products = catalog_queries::similar_products(&state.catalog, id, limit);

    Json(products.into_iter().cloned().collect())
}

pub async fn get_popular_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.popular().to_vec())
}

pub async fn get_featured_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.featured().to_vec())
}
