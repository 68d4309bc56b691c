// Plain data projections handed back to the HTTP layer. These carry the
// denormalized author sub-object so callers never need a secondary lookup to
// render a display name. `UserView` deliberately has no credential field.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::comment::Comment;
use crate::domain::post::{Author, Post};
use crate::domain::user::{User, UserRole};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserView {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostView {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub author: Option<Author>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author_id: post.author_id,
            author: post.author,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentView {
    pub id: i64,
    pub content: String,
    pub post_id: i64,
    pub author_id: i64,
    pub author: Option<Author>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentView {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            post_id: comment.post_id,
            author_id: comment.author_id,
            author: comment.author,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_view_serializes_without_any_credential_field() {
        let view = UserView::from(User::create(
            "alice".into(),
            "alice@example.com".into(),
            "$argon2$fake".into(),
            None,
        ));
        let json = serde_json::to_value(&view).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.get("password").is_none());
        assert!(object.get("password_hash").is_none());
        assert_eq!(object["role"], "user");
    }
}
