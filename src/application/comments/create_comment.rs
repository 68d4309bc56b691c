use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dispatcher::{Command, CommandHandler};
use crate::application::projections::CommentView;
use crate::domain::comment::Comment;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repository::{CommentRepository, PostRepository};

pub struct CreateCommentCommand {
    pub content: String,
    pub post_id: i64,
    pub author_id: i64,
}

impl Command for CreateCommentCommand {
    type Result = CommentView;
}

/// The only handler touching two repositories: the parent post must exist
/// before anything is persisted.
pub struct CreateCommentHandler {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
}

impl CreateCommentHandler {
    pub fn new(comments: Arc<dyn CommentRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { comments, posts }
    }
}

#[async_trait]
impl CommandHandler<CreateCommentCommand> for CreateCommentHandler {
    async fn execute(&self, command: CreateCommentCommand) -> DomainResult<CommentView> {
        if self.posts.find_by_id(command.post_id).await?.is_none() {
            return Err(DomainError::not_found(format!(
                "post {} not found",
                command.post_id
            )));
        }

        let comment = Comment::create(command.content, command.post_id, command.author_id);
        let created = self.comments.create(comment).await?;
        Ok(CommentView::from(created))
    }
}
