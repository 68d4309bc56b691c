use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dispatcher::{Command, CommandHandler};
use crate::application::projections::UserView;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repository::UserRepository;
use crate::domain::user::UserRole;

pub struct UpdateUserCommand {
    pub id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

impl Command for UpdateUserCommand {
    type Result = UserView;
}

pub struct UpdateUserHandler {
    users: Arc<dyn UserRepository>,
}

impl UpdateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl CommandHandler<UpdateUserCommand> for UpdateUserHandler {
    async fn execute(&self, command: UpdateUserCommand) -> DomainResult<UserView> {
        let existing = self
            .users
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("user {} not found", command.id)))?;

        // Uniqueness only matters when the field actually changes; keeping
        // your own email is not a conflict with yourself.
        if let Some(email) = &command.email {
            if email != &existing.email && self.users.find_by_email(email).await?.is_some() {
                return Err(DomainError::conflict("user with this email already exists"));
            }
        }
        if let Some(username) = &command.username {
            if username != &existing.username
                && self.users.find_by_username(username).await?.is_some()
            {
                return Err(DomainError::conflict(
                    "user with this username already exists",
                ));
            }
        }

        let merged = existing.update(command.username, command.email, command.role);
        let updated = self.users.update(merged).await?;
        Ok(UserView::from(updated))
    }
}
