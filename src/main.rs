use std::sync::Arc;

use anyhow::Context;

use blog_api::config::AppConfig;
use blog_api::context::AppContext;
use blog_api::database::postgres::{PgCommentRepository, PgPostRepository, PgUserRepository};
use blog_api::{database, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blog_api=info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;

    let pool = database::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    database::migrate(&pool)
        .await
        .context("failed to run migrations")?;

    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let posts = Arc::new(PgPostRepository::new(pool.clone()));
    let comments = Arc::new(PgCommentRepository::new(pool));

    let bind_addr = format!("{}:{}", config.server.address, config.server.port);
    let ctx = Arc::new(AppContext::new(config, users, posts, comments));

    let app = handlers::router(ctx);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("blog-api listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install ctrl-c handler: {e}");
        return;
    }
    tracing::info!("shutdown signal received");
}
