use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dispatcher::{Command, CommandHandler};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repository::PostRepository;

pub struct DeletePostCommand {
    pub id: i64,
    pub author_id: i64,
}

impl Command for DeletePostCommand {
    type Result = ();
}

pub struct DeletePostHandler {
    posts: Arc<dyn PostRepository>,
}

impl DeletePostHandler {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl CommandHandler<DeletePostCommand> for DeletePostHandler {
    async fn execute(&self, command: DeletePostCommand) -> DomainResult<()> {
        let existing = self
            .posts
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("post {} not found", command.id)))?;

        if existing.author_id != command.author_id {
            return Err(DomainError::forbidden("you can only delete your own posts"));
        }

        // The storage layer cascades the post's comments away with it.
        let deleted = self.posts.delete(command.id).await?;
        if !deleted {
            return Err(DomainError::unexpected("failed to delete post"));
        }
        Ok(())
    }
}
