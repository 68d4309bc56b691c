use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dispatcher::{Query, QueryHandler};
use crate::application::projections::PostView;
use crate::domain::error::DomainResult;
use crate::domain::repository::PostRepository;

pub struct GetAllPostsQuery {
    /// Optional case-insensitive substring filter over title or content.
    pub search_term: Option<String>,
}

impl Query for GetAllPostsQuery {
    type Result = Vec<PostView>;
}

pub struct GetAllPostsHandler {
    posts: Arc<dyn PostRepository>,
}

impl GetAllPostsHandler {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl QueryHandler<GetAllPostsQuery> for GetAllPostsHandler {
    async fn execute(&self, query: GetAllPostsQuery) -> DomainResult<Vec<PostView>> {
        let posts = match query.search_term.as_deref() {
            Some(term) => self.posts.search_by_title_or_content(term).await?,
            None => self.posts.find_all().await?,
        };
        Ok(posts.into_iter().map(PostView::from).collect())
    }
}
