// Domain layer: immutable entities and the storage-facing contracts they
// depend on. Nothing in here performs I/O; uniqueness and ownership checks
// belong to the application handlers.

pub mod comment;
pub mod error;
pub mod post;
pub mod repository;
pub mod user;

pub use comment::Comment;
pub use error::{DomainError, DomainResult};
pub use post::{Author, Post};
pub use user::{User, UserRole};
