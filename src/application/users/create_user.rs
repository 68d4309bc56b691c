use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dispatcher::{Command, CommandHandler};
use crate::application::projections::UserView;
use crate::auth::password;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repository::UserRepository;
use crate::domain::user::{User, UserRole};

pub struct CreateUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<UserRole>,
}

impl Command for CreateUserCommand {
    type Result = UserView;
}

pub struct CreateUserHandler {
    users: Arc<dyn UserRepository>,
}

impl CreateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl CommandHandler<CreateUserCommand> for CreateUserHandler {
    async fn execute(&self, command: CreateUserCommand) -> DomainResult<UserView> {
        // Email is checked before username, so a pair that collides on both
        // reports the email conflict.
        if self.users.find_by_email(&command.email).await?.is_some() {
            return Err(DomainError::conflict("user with this email already exists"));
        }
        if self
            .users
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(DomainError::conflict(
                "user with this username already exists",
            ));
        }

        let password_hash = password::hash(command.password).await?;
        let user = User::create(command.username, command.email, password_hash, command.role);

        let created = self.users.create(user).await?;
        Ok(UserView::from(created))
    }
}
