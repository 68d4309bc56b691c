// Row shapes fetched from Postgres and their explicit mapping into domain
// entities. Post and comment rows carry the joined author columns; they are
// NULL when the query used a LEFT JOIN and the author record is gone.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::comment::Comment;
use crate::domain::error::DomainError;
use crate::domain::post::{Author, Post};
use crate::domain::user::User;

#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRecord> for User {
    type Error = DomainError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let role = record
            .role
            .parse()
            .map_err(|err| DomainError::Storage(format!("users row {}: {err}", record.id)))?;
        Ok(User {
            id: record.id,
            username: record.username,
            email: record.email,
            password_hash: record.password,
            role,
            created_at: record.created_at,
        })
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct PostRecord {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_username: Option<String>,
    pub author_email: Option<String>,
}

impl From<PostRecord> for Post {
    fn from(record: PostRecord) -> Self {
        let author = join_author(
            record.author_id,
            record.author_username,
            record.author_email,
        );
        Post {
            id: record.id,
            title: record.title,
            content: record.content,
            author_id: record.author_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
            author,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct CommentRecord {
    pub id: i64,
    pub content: String,
    pub post_id: i64,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub author_username: Option<String>,
    pub author_email: Option<String>,
}

impl From<CommentRecord> for Comment {
    fn from(record: CommentRecord) -> Self {
        let author = join_author(
            record.author_id,
            record.author_username,
            record.author_email,
        );
        Comment {
            id: record.id,
            content: record.content,
            post_id: record.post_id,
            author_id: record.author_id,
            created_at: record.created_at,
            // No edit operation exists for comments, so the update timestamp
            // mirrors creation.
            updated_at: record.created_at,
            author,
        }
    }
}

fn join_author(id: i64, username: Option<String>, email: Option<String>) -> Option<Author> {
    match (username, email) {
        (Some(username), Some(email)) => Some(Author {
            id,
            username,
            email,
        }),
        _ => None,
    }
}
