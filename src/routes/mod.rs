mod categories;
mod health;
mod inventory;
mod locations;
mod products;

use axum::{
    middleware::from_fn,
    routing::{delete, get, post, put},
    Router,
};

use crate::{middleware::auth_middleware, AppState};

pub fn create_router() -> Router<AppState> {
    let protected = Router::new()
        .route("/locations", post(locations::create_location))
        .route("/locations/{id}", put(locations::update_location))
        .route("/locations/{id}", delete(locations::delete_location))
        .route("/inventory", get(inventory::get_inventory))
        .route_layer(from_fn(auth_middleware));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/products", get(products::search_products))
        .route("/products/popular", get(products::get_popular_products))
        .route("/products/featured", get(products::get_featured_products))
        .route("/products/{id}", get(products::get_product))
        .route("/products/{id}/similar", get(products::get_similar_products))
        .route("/categories", get(categories::get_all_categories))
        .route(
            "/categories/{id}/products",
            get(categories::get_category_products),
        )
        .route("/locations", get(locations::get_locations))
        .merge(protected)
}
