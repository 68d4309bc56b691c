use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dispatcher::{Command, CommandHandler};
use crate::application::projections::PostView;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repository::PostRepository;

pub struct UpdatePostCommand {
    pub id: i64,
    /// Identity of the authenticated caller, checked against ownership.
    pub author_id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Command for UpdatePostCommand {
    type Result = PostView;
}

pub struct UpdatePostHandler {
    posts: Arc<dyn PostRepository>,
}

impl UpdatePostHandler {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl CommandHandler<UpdatePostCommand> for UpdatePostHandler {
    async fn execute(&self, command: UpdatePostCommand) -> DomainResult<PostView> {
        let existing = self
            .posts
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("post {} not found", command.id)))?;

        if existing.author_id != command.author_id {
            return Err(DomainError::forbidden("you can only update your own posts"));
        }

        let merged = existing.update(command.title, command.content);
        let updated = self.posts.update(merged).await?;
        Ok(PostView::from(updated))
    }
}
