mod create_post;
mod delete_post;
mod get_all_posts;
mod get_post_by_id;
mod update_post;

pub use create_post::{CreatePostCommand, CreatePostHandler};
pub use delete_post::{DeletePostCommand, DeletePostHandler};
pub use get_all_posts::{GetAllPostsHandler, GetAllPostsQuery};
pub use get_post_by_id::{GetPostByIdHandler, GetPostByIdQuery};
pub use update_post::{UpdatePostCommand, UpdatePostHandler};
