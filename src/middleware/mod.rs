use axum::{extract::Request, middleware::Next, response::Response};

use crate::error::AppError;

/// Verifies the bearer token and makes the claims available to handlers.
/// Routes behind this layer are the guarded ones: nothing is written to
/// the location store without an authenticated caller.
pub async fn auth_middleware(mut req: Request, next: Next) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authentification requise".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Format de jeton invalide".to_string()))?;

    let claims = crate::utils::jwt::verify_token(token)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
