use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use sqlx::PgPool;
use tower::ServiceExt;

use linka_back::{
    models::{CreateLocationRequest, LocationRole, UpdateLocationRequest},
    queries::location_queries,
    routes, AppState, Catalog,
};

fn state(pool: PgPool) -> AppState {
    AppState {
        db: pool,
        catalog: Arc::new(Catalog::load().unwrap()),
    }
}

fn pin_request(name: &str) -> CreateLocationRequest {
    CreateLocationRequest {
        role: Some(LocationRole::Client),
        name: name.to_string(),
        address: None,
        phone: Some("+228 90 11 22 33".to_string()),
        description: None,
        latitude: 9.55,
        longitude: 1.19,
    }
}

#[sqlx::test]
async fn unauthenticated_pin_creation_is_rejected(pool: PgPool) {
    let app = routes::create_router().with_state(state(pool.clone()));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/locations")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::json!({
                        "name": "Jean",
                        "role": "client",
                        "latitude": 9.55,
                        "longitude": 1.19
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // The guard fires before the store is touched.
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM locations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
async fn soft_delete_hides_from_active_fetch_only(pool: PgPool) {
    let pin = location_queries::insert(&pool, 7, LocationRole::Merchant, &pin_request("Afi"))
        .await
        .unwrap();
    assert!(pin.is_active);

    let active = location_queries::find_active(&pool, None).await.unwrap();
    assert_eq!(active.len(), 1);

    location_queries::deactivate(&pool, pin.id).await.unwrap();

    assert!(location_queries::find_active(&pool, None).await.unwrap().is_empty());

    // The row is still there, only flagged.
    let row = location_queries::find_by_id(&pool, pin.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!row.is_active);
    assert_eq!(row.name, "Afi");
}

#[sqlx::test]
async fn role_filter_narrows_active_fetch(pool: PgPool) {
    location_queries::insert(&pool, 1, LocationRole::Client, &pin_request("Jean"))
        .await
        .unwrap();
    location_queries::insert(&pool, 2, LocationRole::Merchant, &pin_request("Afi"))
        .await
        .unwrap();

    let merchants = location_queries::find_active(&pool, Some(LocationRole::Merchant))
        .await
        .unwrap();
    assert_eq!(merchants.len(), 1);
    assert_eq!(merchants[0].role, LocationRole::Merchant);

    let all = location_queries::find_active(&pool, None).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test]
async fn update_leaves_coordinates_untouched(pool: PgPool) {
    let pin = location_queries::insert(&pool, 7, LocationRole::Client, &pin_request("Jean"))
        .await
        .unwrap();

    let updated = location_queries::update(
        &pool,
        pin.id,
        &UpdateLocationRequest {
            role: None,
            name: Some("Jean K.".to_string()),
            address: Some("Quartier Tchré".to_string()),
            phone: None,
            description: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "Jean K.");
    assert_eq!(updated.address.as_deref(), Some("Quartier Tchré"));
    assert_eq!(updated.latitude, 9.55);
    assert_eq!(updated.longitude, 1.19);
    // Omitted fields keep their values.
    assert_eq!(updated.phone.as_deref(), Some("+228 90 11 22 33"));
}

#[sqlx::test]
async fn readiness_reports_catalog_shape(pool: PgPool) {
    let app = routes::create_router().with_state(state(pool));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/ready")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], "connected");
    assert!(body["catalog"]["products"].as_u64().unwrap() > 0);
    assert!(body["catalog"]["categories"].as_u64().unwrap() > 0);
}
