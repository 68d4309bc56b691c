mod create_comment;
mod get_comments_by_post;

pub use create_comment::{CreateCommentCommand, CreateCommentHandler};
pub use get_comments_by_post::{GetCommentsByPostHandler, GetCommentsByPostQuery};
