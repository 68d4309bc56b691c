use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dispatcher::{Query, QueryHandler};
use crate::application::projections::PostView;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repository::PostRepository;

pub struct GetPostByIdQuery {
    pub id: i64,
}

impl Query for GetPostByIdQuery {
    type Result = PostView;
}

pub struct GetPostByIdHandler {
    posts: Arc<dyn PostRepository>,
}

impl GetPostByIdHandler {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl QueryHandler<GetPostByIdQuery> for GetPostByIdHandler {
    async fn execute(&self, query: GetPostByIdQuery) -> DomainResult<PostView> {
        // Unlike the list queries, a post whose author record is gone is
        // still returned here; it just carries no author snapshot.
        self.posts
            .find_by_id(query.id)
            .await?
            .map(PostView::from)
            .ok_or_else(|| DomainError::not_found(format!("post {} not found", query.id)))
    }
}
