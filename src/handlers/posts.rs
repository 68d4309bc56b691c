use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::posts::{
    CreatePostCommand, DeletePostCommand, GetAllPostsQuery, GetPostByIdQuery, UpdatePostCommand,
};
use crate::application::projections::PostView;
use crate::context::AppContext;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

pub async fn list(
    State(ctx): State<Arc<AppContext>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<PostView>>, ApiError> {
    let views = ctx
        .queries
        .dispatch(GetAllPostsQuery {
            search_term: params.search,
        })
        .await?;
    Ok(Json(views))
}

pub async fn show(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
) -> Result<Json<PostView>, ApiError> {
    let view = ctx.queries.dispatch(GetPostByIdQuery { id }).await?;
    Ok(Json(view))
}

pub async fn create(
    State(ctx): State<Arc<AppContext>>,
    Extension(caller): Extension<AuthUser>,
    Json(body): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostView>), ApiError> {
    let view = ctx
        .commands
        .dispatch(CreatePostCommand {
            title: body.title,
            content: body.content,
            author_id: caller.id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn update(
    State(ctx): State<Arc<AppContext>>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(body): Json<UpdatePostRequest>,
) -> Result<Json<PostView>, ApiError> {
    let view = ctx
        .commands
        .dispatch(UpdatePostCommand {
            id,
            author_id: caller.id,
            title: body.title,
            content: body.content,
        })
        .await?;
    Ok(Json(view))
}

pub async fn remove(
    State(ctx): State<Arc<AppContext>>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    ctx.commands
        .dispatch(DeletePostCommand {
            id,
            author_id: caller.id,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
