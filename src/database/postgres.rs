// Postgres implementations of the repository contracts. Queries go through
// sqlx's runtime API; list queries INNER JOIN users so rows whose author
// record is gone drop out silently, by-id lookups LEFT JOIN so the entity is
// still found without its snapshot.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::record::{CommentRecord, PostRecord, UserRecord};
use crate::domain::comment::Comment;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::post::Post;
use crate::domain::repository::{CommentRepository, PostRepository, UserRepository};
use crate::domain::user::User;

const USER_COLUMNS: &str = "id, username, email, password, role, created_at";

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: User) -> DomainResult<User> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (username, email, password, role, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(user.with_id(id))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        record.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        record.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        record.map(User::try_from).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let records = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        records.into_iter().map(User::try_from).collect()
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let affected = sqlx::query(
            "UPDATE users SET username = $2, email = $3, password = $4, role = $5 WHERE id = $1",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .execute(&self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(DomainError::not_found(format!("user {} not found", user.id)));
        }
        Ok(user)
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        let affected = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(affected > 0)
    }
}

const POST_SELECT: &str = "SELECT p.id, p.title, p.content, p.author_id, p.created_at,
        p.updated_at, u.username AS author_username, u.email AS author_email
     FROM posts p";

pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, post: Post) -> DomainResult<Post> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO posts (title, content, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.author_id)
        .bind(post.created_at)
        .bind(post.updated_at)
        .fetch_one(&self.pool)
        .await?;

        // Re-read so the created post carries its author snapshot.
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::unexpected("created post vanished"))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Post>> {
        let record = sqlx::query_as::<_, PostRecord>(&format!(
            "{POST_SELECT} LEFT JOIN users u ON u.id = p.author_id WHERE p.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(Post::from))
    }

    async fn find_all(&self) -> DomainResult<Vec<Post>> {
        let records = sqlx::query_as::<_, PostRecord>(&format!(
            "{POST_SELECT} JOIN users u ON u.id = p.author_id
             ORDER BY p.created_at DESC, p.id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(records.into_iter().map(Post::from).collect())
    }

    async fn find_by_author(&self, author_id: i64) -> DomainResult<Vec<Post>> {
        let records = sqlx::query_as::<_, PostRecord>(&format!(
            "{POST_SELECT} JOIN users u ON u.id = p.author_id
             WHERE p.author_id = $1
             ORDER BY p.created_at DESC, p.id DESC"
        ))
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records.into_iter().map(Post::from).collect())
    }

    async fn search_by_title_or_content(&self, term: &str) -> DomainResult<Vec<Post>> {
        let pattern = format!("%{term}%");
        let records = sqlx::query_as::<_, PostRecord>(&format!(
            "{POST_SELECT} JOIN users u ON u.id = p.author_id
             WHERE p.title ILIKE $1 OR p.content ILIKE $1
             ORDER BY p.created_at DESC, p.id DESC"
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(records.into_iter().map(Post::from).collect())
    }

    async fn update(&self, post: Post) -> DomainResult<Post> {
        let affected =
            sqlx::query("UPDATE posts SET title = $2, content = $3, updated_at = $4 WHERE id = $1")
                .bind(post.id)
                .bind(&post.title)
                .bind(&post.content)
                .bind(post.updated_at)
                .execute(&self.pool)
                .await?
                .rows_affected();

        if affected == 0 {
            return Err(DomainError::not_found(format!("post {} not found", post.id)));
        }
        Ok(post)
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        // Comments go with the post via the ON DELETE CASCADE constraint.
        let affected = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(affected > 0)
    }
}

const COMMENT_SELECT: &str = "SELECT c.id, c.content, c.post_id, c.author_id, c.created_at,
        u.username AS author_username, u.email AS author_email
     FROM comments c";

pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create(&self, comment: Comment) -> DomainResult<Comment> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO comments (content, post_id, author_id, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&comment.content)
        .bind(comment.post_id)
        .bind(comment.author_id)
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::unexpected("created comment vanished"))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Comment>> {
        let record = sqlx::query_as::<_, CommentRecord>(&format!(
            "{COMMENT_SELECT} LEFT JOIN users u ON u.id = c.author_id WHERE c.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(Comment::from))
    }

    async fn find_by_post(&self, post_id: i64) -> DomainResult<Vec<Comment>> {
        let records = sqlx::query_as::<_, CommentRecord>(&format!(
            "{COMMENT_SELECT} JOIN users u ON u.id = c.author_id
             WHERE c.post_id = $1
             ORDER BY c.created_at ASC, c.id ASC"
        ))
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records.into_iter().map(Comment::from).collect())
    }

    async fn find_by_author(&self, author_id: i64) -> DomainResult<Vec<Comment>> {
        let records = sqlx::query_as::<_, CommentRecord>(&format!(
            "{COMMENT_SELECT} JOIN users u ON u.id = c.author_id
             WHERE c.author_id = $1
             ORDER BY c.created_at DESC, c.id DESC"
        ))
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records.into_iter().map(Comment::from).collect())
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        let affected = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(affected > 0)
    }
}
