use std::sync::Arc;

use anyhow::Result;

use blog_api::application::posts::CreatePostCommand;
use blog_api::application::projections::{PostView, UserView};
use blog_api::application::users::CreateUserCommand;
use blog_api::config::{AppConfig, DatabaseConfig, SecurityConfig, ServerConfig};
use blog_api::context::AppContext;
use blog_api::database::memory::MemoryDb;

/// Fully wired context over the in-memory store. Each test gets its own,
/// so there is no shared state between test functions.
pub fn test_context() -> Arc<AppContext> {
    let db = Arc::new(MemoryDb::new());
    Arc::new(AppContext::new(
        test_config(),
        db.clone(),
        db.clone(),
        db,
    ))
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            address: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgres://unused".into(),
            max_connections: 1,
        },
        security: SecurityConfig {
            jwt_secret: "test-secret-do-not-use-in-production".into(),
            jwt_expiry_hours: 1,
        },
    }
}

#[allow(dead_code)]
pub async fn register_user(ctx: &AppContext, username: &str) -> Result<UserView> {
    let view = ctx
        .commands
        .dispatch(CreateUserCommand {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: "correct horse battery staple".to_string(),
            role: None,
        })
        .await?;
    Ok(view)
}

#[allow(dead_code)]
pub async fn create_post(
    ctx: &AppContext,
    author_id: i64,
    title: &str,
    content: &str,
) -> Result<PostView> {
    let view = ctx
        .commands
        .dispatch(CreatePostCommand {
            title: title.to_string(),
            content: content.to_string(),
            author_id,
        })
        .await?;
    Ok(view)
}
