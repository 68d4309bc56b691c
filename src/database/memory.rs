// In-memory backend implementing all three repository contracts on one
// shared store. It mirrors the Postgres adapter's semantics exactly: ordering
// guarantees, comment cascade on post deletion, and silent exclusion of rows
// whose author record is gone. The integration tests run entirely on it.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::comment::Comment;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::post::{Author, Post};
use crate::domain::repository::{CommentRepository, PostRepository, UserRepository};
use crate::domain::user::User;

#[derive(Default)]
struct Store {
    users: HashMap<i64, User>,
    posts: HashMap<i64, Post>,
    comments: HashMap<i64, Comment>,
    next_id: i64,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn author_snapshot(&self, author_id: i64) -> Option<Author> {
        self.users.get(&author_id).map(|user| Author {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        })
    }
}

/// Shared in-memory database. Clone handles freely; they all point at the
/// same store.
#[derive(Clone, Default)]
pub struct MemoryDb {
    store: Arc<RwLock<Store>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryDb {
    async fn create(&self, user: User) -> DomainResult<User> {
        let mut store = self.store.write().await;
        let id = store.next_id();
        let created = user.with_id(id);
        store.users.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        Ok(self.store.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let store = self.store.read().await;
        let mut users: Vec<User> = store.users.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let mut store = self.store.write().await;
        if !store.users.contains_key(&user.id) {
            return Err(DomainError::not_found(format!("user {} not found", user.id)));
        }
        store.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        // Posts and comments by this author stay behind, dangling; that is
        // the documented policy the list finders compensate for.
        Ok(self.store.write().await.users.remove(&id).is_some())
    }
}

#[async_trait]
impl PostRepository for MemoryDb {
    async fn create(&self, post: Post) -> DomainResult<Post> {
        let mut store = self.store.write().await;
        let id = store.next_id();
        let created = post.with_id(id);
        store.posts.insert(id, created.clone());
        let snapshot = store.author_snapshot(created.author_id);
        Ok(match snapshot {
            Some(author) => created.with_author(author),
            None => created,
        })
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Post>> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).map(|post| {
            match store.author_snapshot(post.author_id) {
                Some(author) => post.with_author(author),
                None => post.clone(),
            }
        }))
    }

    async fn find_all(&self) -> DomainResult<Vec<Post>> {
        let store = self.store.read().await;
        Ok(resolved_posts(&store, |_| true))
    }

    async fn find_by_author(&self, author_id: i64) -> DomainResult<Vec<Post>> {
        let store = self.store.read().await;
        Ok(resolved_posts(&store, |post| post.author_id == author_id))
    }

    async fn search_by_title_or_content(&self, term: &str) -> DomainResult<Vec<Post>> {
        let needle = term.to_lowercase();
        let store = self.store.read().await;
        Ok(resolved_posts(&store, |post| {
            post.title.to_lowercase().contains(&needle)
                || post.content.to_lowercase().contains(&needle)
        }))
    }

    async fn update(&self, post: Post) -> DomainResult<Post> {
        let mut store = self.store.write().await;
        if !store.posts.contains_key(&post.id) {
            return Err(DomainError::not_found(format!("post {} not found", post.id)));
        }
        store.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        let mut store = self.store.write().await;
        let removed = store.posts.remove(&id).is_some();
        if removed {
            // Cascade, as the Postgres schema does with its FK constraint.
            store.comments.retain(|_, comment| comment.post_id != id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl CommentRepository for MemoryDb {
    async fn create(&self, comment: Comment) -> DomainResult<Comment> {
        let mut store = self.store.write().await;
        let id = store.next_id();
        let created = comment.with_id(id);
        store.comments.insert(id, created.clone());
        let snapshot = store.author_snapshot(created.author_id);
        Ok(match snapshot {
            Some(author) => created.with_author(author),
            None => created,
        })
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Comment>> {
        let store = self.store.read().await;
        Ok(store.comments.get(&id).map(|comment| {
            match store.author_snapshot(comment.author_id) {
                Some(author) => comment.with_author(author),
                None => comment.clone(),
            }
        }))
    }

    async fn find_by_post(&self, post_id: i64) -> DomainResult<Vec<Comment>> {
        let store = self.store.read().await;
        let mut comments = resolved_comments(&store, |c| c.post_id == post_id);
        // Display order: oldest first.
        comments.sort_by_key(|c| (c.created_at, c.id));
        Ok(comments)
    }

    async fn find_by_author(&self, author_id: i64) -> DomainResult<Vec<Comment>> {
        let store = self.store.read().await;
        let mut comments = resolved_comments(&store, |c| c.author_id == author_id);
        // Audit order: newest first.
        comments.sort_by_key(|c| std::cmp::Reverse((c.created_at, c.id)));
        Ok(comments)
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        Ok(self.store.write().await.comments.remove(&id).is_some())
    }
}

fn resolved_posts(store: &Store, keep: impl Fn(&Post) -> bool) -> Vec<Post> {
    let mut posts: Vec<Post> = store
        .posts
        .values()
        .filter(|post| keep(post))
        .filter_map(|post| {
            store
                .author_snapshot(post.author_id)
                .map(|author| post.with_author(author))
        })
        .collect();
    posts.sort_by_key(|p| std::cmp::Reverse((p.created_at, p.id)));
    posts
}

fn resolved_comments(store: &Store, keep: impl Fn(&Comment) -> bool) -> Vec<Comment> {
    store
        .comments
        .values()
        .filter(|comment| keep(comment))
        .filter_map(|comment| {
            store
                .author_snapshot(comment.author_id)
                .map(|author| comment.with_author(author))
        })
        .collect()
}
