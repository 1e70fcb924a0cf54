use axum::{
    Extension, Json,
    extract::{Query, State},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{InventoryItem, InventoryQuery, UserRole},
    queries::{catalog_queries, inventory_queries},
    utils::jwt::Claims,
};

pub async fn get_inventory(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<InventoryQuery>,
) -> Result<Json<Vec<InventoryItem>>> {
    if claims.role != UserRole::Merchant && claims.role != UserRole::Admin {
        return Err(AppError::Forbidden(
            "Réservé aux marchands".to_string(),
        ));
    }

    if params.store.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Le nom de la boutique est obligatoire".to_string(),
        ));
    }

    let products = catalog_queries::store_products(&state.catalog, &params.store);
    let product_ids: Vec<i32> = products.iter().map(|p| p.id).collect();

    let metrics = inventory_queries::find_metrics_by_product_ids(&state.db, &product_ids).await?;

    let items = inventory_queries::build_items(products, metrics);

    Ok(Json(inventory_queries::filter_and_sort(items, &params)))
}
