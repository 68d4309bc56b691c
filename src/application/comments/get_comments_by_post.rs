use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dispatcher::{Query, QueryHandler};
use crate::application::projections::CommentView;
use crate::domain::error::DomainResult;
use crate::domain::repository::CommentRepository;

pub struct GetCommentsByPostQuery {
    pub post_id: i64,
}

impl Query for GetCommentsByPostQuery {
    type Result = Vec<CommentView>;
}

pub struct GetCommentsByPostHandler {
    comments: Arc<dyn CommentRepository>,
}

impl GetCommentsByPostHandler {
    pub fn new(comments: Arc<dyn CommentRepository>) -> Self {
        Self { comments }
    }
}

#[async_trait]
impl QueryHandler<GetCommentsByPostQuery> for GetCommentsByPostHandler {
    async fn execute(&self, query: GetCommentsByPostQuery) -> DomainResult<Vec<CommentView>> {
        // A post with no comments is an empty list, never a failure; the
        // post's own existence is not checked here.
        let comments = self.comments.find_by_post(query.post_id).await?;
        Ok(comments.into_iter().map(CommentView::from).collect())
    }
}
