use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dispatcher::{Command, CommandHandler};
use crate::application::projections::PostView;
use crate::domain::error::DomainResult;
use crate::domain::post::Post;
use crate::domain::repository::PostRepository;

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    /// Identity of the authenticated caller; the post's author is fixed to it
    /// at creation.
    pub author_id: i64,
}

impl Command for CreatePostCommand {
    type Result = PostView;
}

pub struct CreatePostHandler {
    posts: Arc<dyn PostRepository>,
}

impl CreatePostHandler {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl CommandHandler<CreatePostCommand> for CreatePostHandler {
    async fn execute(&self, command: CreatePostCommand) -> DomainResult<PostView> {
        let post = Post::create(command.title, command.content, command.author_id);
        let created = self.posts.create(post).await?;
        Ok(PostView::from(created))
    }
}
