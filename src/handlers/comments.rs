use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::comments::{CreateCommentCommand, GetCommentsByPostQuery};
use crate::application::projections::CommentView;
use crate::context::AppContext;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
    pub post_id: i64,
}

pub async fn create(
    State(ctx): State<Arc<AppContext>>,
    Extension(caller): Extension<AuthUser>,
    Json(body): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentView>), ApiError> {
    let view = ctx
        .commands
        .dispatch(CreateCommentCommand {
            content: body.content,
            post_id: body.post_id,
            author_id: caller.id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn by_post(
    State(ctx): State<Arc<AppContext>>,
    Path(post_id): Path<i64>,
) -> Result<Json<Vec<CommentView>>, ApiError> {
    let views = ctx
        .queries
        .dispatch(GetCommentsByPostQuery { post_id })
        .await?;
    Ok(Json(views))
}
