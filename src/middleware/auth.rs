use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use std::sync::Arc;

use crate::application::users::GetUserByIdQuery;
use crate::context::AppContext;
use crate::domain::user::UserRole;
use crate::error::ApiError;

/// Authenticated caller context extracted from a verified JWT. The token is
/// not trusted on its own: the subject must still resolve to a live user
/// record, so a deleted account cannot keep acting on a stale token.
#[derive(Clone, Debug, Serialize)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

/// JWT authentication middleware: validates the bearer token, resolves the
/// user through the query bus and injects `AuthUser` into the request.
pub async fn jwt_auth_middleware(
    State(ctx): State<Arc<AppContext>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers())?;
    let claims = ctx.auth.verify_token(&token)?;

    let user = ctx
        .queries
        .dispatch(GetUserByIdQuery { id: claims.sub })
        .await
        .map_err(|_| ApiError::unauthorized("user not found"))?;

    request.extensions_mut().insert(AuthUser {
        id: user.id,
        username: user.username,
        email: user.email,
        role: user.role,
    });

    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer ...` header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(|| ApiError::unauthorized("missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("invalid Authorization header format"))?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.to_string()),
        Some(_) => Err(ApiError::unauthorized("empty bearer token")),
        None => Err(ApiError::unauthorized(
            "Authorization header must use Bearer token format",
        )),
    }
}
