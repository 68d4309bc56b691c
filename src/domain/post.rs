use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of an author's public fields, attached to posts and
/// comments for display. A value, not a live reference; it is never persisted
/// back to the owning record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// A blog post. The author reference is fixed at creation; "updates" produce
/// a new value with only title/content (and the update timestamp) changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: Option<Author>,
}

impl Post {
    pub fn create(title: String, content: String, author_id: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title,
            content,
            author_id,
            created_at: now,
            updated_at: now,
            author: None,
        }
    }

    /// Partial update: each field independently optional, omitted fields keep
    /// their previous value. Advances `updated_at` to call time.
    pub fn update(&self, title: Option<String>, content: Option<String>) -> Self {
        Self {
            id: self.id,
            title: title.unwrap_or_else(|| self.title.clone()),
            content: content.unwrap_or_else(|| self.content.clone()),
            author_id: self.author_id,
            created_at: self.created_at,
            updated_at: Utc::now(),
            author: self.author.clone(),
        }
    }

    /// Copy carrying a denormalized author snapshot, all other fields intact.
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

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post::create("T".into(), "C".into(), 7)
    }

    #[test]
    fn create_stamps_both_timestamps_equal() {
        let post = sample();
        assert_eq!(post.created_at, post.updated_at);
        assert_eq!(post.author_id, 7);
        assert!(post.author.is_none());
    }

    #[test]
    fn empty_update_only_advances_updated_at() {
        let post = sample();
        let updated = post.update(None, None);
        assert!(updated.updated_at >= post.updated_at);
        assert_eq!(
            Post {
                updated_at: post.updated_at,
                ..updated
            },
            post
        );
    }

    #[test]
    fn update_never_touches_author_or_creation_time() {
        let post = sample().with_author(Author {
            id: 7,
            username: "alice".into(),
            email: "alice@example.com".into(),
        });
        let updated = post.update(Some("T2".into()), None);
        assert_eq!(updated.title, "T2");
        assert_eq!(updated.content, "C");
        assert_eq!(updated.author_id, 7);
        assert_eq!(updated.created_at, post.created_at);
        assert_eq!(updated.author, post.author);
    }

    #[test]
    fn with_author_alters_nothing_else() {
        let post = sample();
        let author = Author {
            id: 7,
            username: "alice".into(),
            email: "alice@example.com".into(),
        };
        let projected = post.with_author(author.clone());
        assert_eq!(projected.author, Some(author));
        assert_eq!(
            Post {
                author: None,
                ..projected
            },
            post
        );
    }
}
