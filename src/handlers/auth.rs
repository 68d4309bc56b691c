use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::auth::TokenResponse;
use crate::context::AppContext;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = ctx.auth.validate_user(&body.email, &body.password).await?;
    let token = ctx.auth.login(&user)?;
    Ok(Json(token))
}

/// Whoever the middleware resolved from the token.
pub async fn me(Extension(caller): Extension<AuthUser>) -> Json<AuthUser> {
    Json(caller)
}
