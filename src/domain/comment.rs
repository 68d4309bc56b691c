use crate::domain::post::Author;
use chrono::{DateTime, Utc};

/// A comment on a post. There is no edit operation, so `updated_at` always
/// mirrors `created_at`; the field exists only to keep the projection shape
/// uniform with posts.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub post_id: i64,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: Option<Author>,
}

impl Comment {
    pub fn create(content: String, post_id: i64, author_id: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            content,
            post_id,
            author_id,
            created_at: now,
            updated_at: now,
            author: None,
        }
    }

    pub fn with_author(&self, author: Author) -> Self {
        Self {
            author: Some(author),
            ..self.clone()
        }
    }

    pub fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }
}
