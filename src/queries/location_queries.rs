use sqlx::PgPool;

use crate::{
    error::Result,
    models::{CreateLocationRequest, Location, LocationRole, UpdateLocationRequest},
};

/// Active pins, optionally narrowed to a single role.
pub async fn find_active(pool: &PgPool, role: Option<LocationRole>) -> Result<Vec<Location>> {
    let locations = sqlx::query_as::<_, Location>(
        "SELECT * FROM locations
         WHERE is_active = TRUE AND ($1::location_role IS NULL OR role = $1)
         ORDER BY created_at ASC",
    )
    .bind(role)
    .fetch_all(pool)
    .await?;

    Ok(locations)
}

/// Lookup by id regardless of the active flag; soft-deleted rows stay
/// reachable here.
pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Location>> {
    let location = sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(location)
}

pub async fn insert(
    pool: &PgPool,
    user_id: i32,
    role: LocationRole,
    req: &CreateLocationRequest,
) -> Result<Location> {
    let location = sqlx::query_as::<_, Location>(
        "INSERT INTO locations (user_id, role, name, address, phone, description, latitude, longitude)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING *",
    )
    .bind(user_id)
    .bind(role)
    .bind(&req.name)
    .bind(&req.address)
    .bind(&req.phone)
    .bind(&req.description)
    .bind(req.latitude)
    .bind(req.longitude)
    .fetch_one(pool)
    .await?;

    Ok(location)
}

/// Coordinates are fixed at creation and never touched by updates.
pub async fn update(pool: &PgPool, id: i32, req: &UpdateLocationRequest) -> Result<Location> {
    let location = sqlx::query_as::<_, Location>(
        "UPDATE locations
         SET role = COALESCE($2, role),
             name = COALESCE($3, name),
             address = COALESCE($4, address),
             phone = COALESCE($5, phone),
             description = COALESCE($6, description),
             updated_at = NOW()
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(req.role)
    .bind(&req.name)
    .bind(&req.address)
    .bind(&req.phone)
    .bind(&req.description)
    .fetch_one(pool)
    .await?;

    Ok(location)
}

/// Soft delete: the row stays in place and only disappears from active
/// fetches. One-way, no reactivation path.
pub async fn deactivate(pool: &PgPool, id: i32) -> Result<()> {
    sqlx::query("UPDATE locations SET is_active = FALSE, updated_at = NOW() WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
