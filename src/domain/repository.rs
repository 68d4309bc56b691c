// Storage-facing contracts the handlers depend on. Any adapter satisfying
// these traits is substitutable: the Postgres adapter in `crate::database`
// backs production, the in-memory adapter backs the integration tests.
//
// Ordering guarantees are part of the contract: post finders return
// newest-first, comments-by-post oldest-first (display order) and
// comments-by-author newest-first (audit order). List finders attach author
// snapshots and silently exclude rows whose author record no longer resolves;
// `find_by_id` attaches the snapshot when it can but never excludes.

use async_trait::async_trait;

use crate::domain::comment::Comment;
use crate::domain::error::DomainResult;
use crate::domain::post::Post;
use crate::domain::user::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user, returning it with the storage-assigned identity.
    async fn create(&self, user: User) -> DomainResult<User>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;

    async fn find_all(&self) -> DomainResult<Vec<User>>;

    /// Persist a merged user. Fails with `NotFound` if no record carries the
    /// entity's identity.
    async fn update(&self, user: User) -> DomainResult<User>;

    /// Hard delete. Returns true iff a record was removed.
    async fn delete(&self, id: i64) -> DomainResult<bool>;
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: Post) -> DomainResult<Post>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Post>>;

    /// All posts, newest-first.
    async fn find_all(&self) -> DomainResult<Vec<Post>>;

    /// Posts by one author, newest-first.
    async fn find_by_author(&self, author_id: i64) -> DomainResult<Vec<Post>>;

    /// Case-insensitive substring match over title OR content, newest-first.
    async fn search_by_title_or_content(&self, term: &str) -> DomainResult<Vec<Post>>;

    async fn update(&self, post: Post) -> DomainResult<Post>;

    /// Hard delete. The storage layer cascades deletion to the post's
    /// comments. Returns true iff a record was removed.
    async fn delete(&self, id: i64) -> DomainResult<bool>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, comment: Comment) -> DomainResult<Comment>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Comment>>;

    /// Comments on one post in display order (oldest-first).
    async fn find_by_post(&self, post_id: i64) -> DomainResult<Vec<Comment>>;

    /// Comments by one author in audit order (newest-first).
    async fn find_by_author(&self, author_id: i64) -> DomainResult<Vec<Comment>>;

    async fn delete(&self, id: i64) -> DomainResult<bool>;
}
