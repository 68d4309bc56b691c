use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::projections::UserView;
use crate::application::users::{
    CreateUserCommand, DeleteUserCommand, GetAllUsersQuery, GetUserByIdQuery, UpdateUserCommand,
};
use crate::context::AppContext;
use crate::domain::user::UserRole;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<UserRole>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

pub async fn register(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserView>), ApiError> {
    let view = ctx
        .commands
        .dispatch(CreateUserCommand {
            username: body.username,
            email: body.email,
            password: body.password,
            role: body.role,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn list(State(ctx): State<Arc<AppContext>>) -> Result<Json<Vec<UserView>>, ApiError> {
    let views = ctx.queries.dispatch(GetAllUsersQuery).await?;
    Ok(Json(views))
}

pub async fn show(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
) -> Result<Json<UserView>, ApiError> {
    let view = ctx.queries.dispatch(GetUserByIdQuery { id }).await?;
    Ok(Json(view))
}

pub async fn update(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UserView>, ApiError> {
    let view = ctx
        .commands
        .dispatch(UpdateUserCommand {
            id,
            username: body.username,
            email: body.email,
            role: body.role,
        })
        .await?;
    Ok(Json(view))
}

pub async fn remove(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    ctx.commands.dispatch(DeleteUserCommand { id }).await?;
    Ok(StatusCode::NO_CONTENT)
}
