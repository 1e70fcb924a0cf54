use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{
        CreateLocationRequest, Location, LocationFilter, LocationResponse, UpdateLocationRequest,
    },
    queries::location_queries,
    utils::extractors::extract_user_id,
    utils::jwt::Claims,
};

pub async fn get_locations(
    State(state): State<AppState>,
    Query(filter): Query<LocationFilter>,
) -> Result<Json<Vec<LocationResponse>>> {
    let locations = location_queries::find_active(&state.db, filter.role).await?;

    Ok(Json(
        locations.into_iter().map(LocationResponse::from).collect(),
    ))
}

pub async fn create_location(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateLocationRequest>,
) -> Result<(StatusCode, Json<LocationResponse>)> {
    let user_id = extract_user_id(&claims)?;

    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("Le nom est obligatoire".to_string()));
    }

    let role = payload
        .role
        .or_else(|| claims.role.location_role())
        .ok_or_else(|| {
            AppError::BadRequest("Un rôle de position est requis".to_string())
        })?;

    let location = location_queries::insert(&state.db, user_id, role, &payload).await?;

    tracing::info!(
        "Location {} created by user {} at ({}, {})",
        location.id,
        user_id,
        location.latitude,
        location.longitude
    );

    Ok((StatusCode::CREATED, Json(location.into())))
}

pub async fn update_location(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLocationRequest>,
) -> Result<Json<LocationResponse>> {
    let user_id = extract_user_id(&claims)?;

    let existing = find_owned(&state, id, user_id).await?;

    if let Some(ref name) = payload.name {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("Le nom est obligatoire".to_string()));
        }
    }

    let location = location_queries::update(&state.db, existing.id, &payload).await?;

    Ok(Json(location.into()))
}

pub async fn delete_location(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let user_id = extract_user_id(&claims)?;

    let existing = find_owned(&state, id, user_id).await?;

    location_queries::deactivate(&state.db, existing.id).await?;

    tracing::info!("Location {} deactivated by user {}", existing.id, user_id);

    Ok(StatusCode::NO_CONTENT)
}

/// Ownership gate for mutations: only the pin's owner may edit or
/// deactivate it.
async fn find_owned(state: &AppState, id: i32, user_id: i32) -> Result<Location> {
    let location = location_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Position introuvable".to_string()))?;

    if location.user_id != user_id {
        return Err(AppError::Forbidden(
            "Vous ne pouvez modifier que vos propres positions".to_string(),
        ));
    }

    Ok(location)
}
