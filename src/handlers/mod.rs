// HTTP surface. Controllers stay thin: build a command or query from the
// request, hand it to the bus, serialize the projection that comes back.
// Read routes are public; mutations on posts, everything under /comments and
// /auth/me require a verified caller.

pub mod auth;
pub mod comments;
pub mod health;
pub mod posts;
pub mod users;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;
use crate::middleware::auth::jwt_auth_middleware;

pub fn router(ctx: Arc<AppContext>) -> Router {
    let public = Router::new()
        .route("/health", get(health::check))
        .route("/health/ready", get(health::ready))
        .route("/auth/login", post(auth::login))
        .route("/users/register", post(users::register))
        .route("/users", get(users::list))
        .route(
            "/users/:id",
            get(users::show).put(users::update).delete(users::remove),
        )
        .route("/posts", get(posts::list))
        .route("/posts/:id", get(posts::show));

    let protected = Router::new()
        .route("/auth/me", get(auth::me))
        .route("/posts", post(posts::create))
        .route("/posts/:id", axum::routing::put(posts::update).delete(posts::remove))
        .route("/comments", post(comments::create))
        .route("/comments/post/:post_id", get(comments::by_post))
        .route_layer(middleware::from_fn_with_state(
            ctx.clone(),
            jwt_auth_middleware,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
