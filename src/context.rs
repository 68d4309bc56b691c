// Startup wiring. No dependency-injection container and no module-scoped
// singletons: the repositories are built once, handed to their handlers by
// explicit reference, and the bus registration tables are populated by
// explicit calls. The resulting context is immutable for the life of the
// process.

use std::sync::Arc;

use crate::application::comments::{
    CreateCommentCommand, CreateCommentHandler, GetCommentsByPostHandler, GetCommentsByPostQuery,
};
use crate::application::dispatcher::{CommandBus, QueryBus};
use crate::application::posts::{
    CreatePostCommand, CreatePostHandler, DeletePostCommand, DeletePostHandler, GetAllPostsHandler,
    GetAllPostsQuery, GetPostByIdHandler, GetPostByIdQuery, UpdatePostCommand, UpdatePostHandler,
};
use crate::application::users::{
    CreateUserCommand, CreateUserHandler, DeleteUserCommand, DeleteUserHandler, GetAllUsersHandler,
    GetAllUsersQuery, GetUserByIdHandler, GetUserByIdQuery, UpdateUserCommand, UpdateUserHandler,
};
use crate::auth::AuthService;
use crate::config::AppConfig;
use crate::domain::repository::{CommentRepository, PostRepository, UserRepository};

pub struct AppContext {
    pub config: AppConfig,
    pub commands: CommandBus,
    pub queries: QueryBus,
    pub auth: AuthService,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        let mut commands = CommandBus::new();
        commands.register::<CreateUserCommand, _>(CreateUserHandler::new(users.clone()));
        commands.register::<UpdateUserCommand, _>(UpdateUserHandler::new(users.clone()));
        commands.register::<DeleteUserCommand, _>(DeleteUserHandler::new(users.clone()));
        commands.register::<CreatePostCommand, _>(CreatePostHandler::new(posts.clone()));
        commands.register::<UpdatePostCommand, _>(UpdatePostHandler::new(posts.clone()));
        commands.register::<DeletePostCommand, _>(DeletePostHandler::new(posts.clone()));
        commands.register::<CreateCommentCommand, _>(CreateCommentHandler::new(
            comments.clone(),
            posts.clone(),
        ));

        let mut queries = QueryBus::new();
        queries.register::<GetUserByIdQuery, _>(GetUserByIdHandler::new(users.clone()));
        queries.register::<GetAllUsersQuery, _>(GetAllUsersHandler::new(users.clone()));
        queries.register::<GetPostByIdQuery, _>(GetPostByIdHandler::new(posts.clone()));
        queries.register::<GetAllPostsQuery, _>(GetAllPostsHandler::new(posts.clone()));
        queries.register::<GetCommentsByPostQuery, _>(GetCommentsByPostHandler::new(comments));

        let auth = AuthService::new(users, config.security.clone());

        Self {
            config,
            commands,
            queries,
            auth,
        }
    }
}
