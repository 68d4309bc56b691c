use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dispatcher::{Command, CommandHandler};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repository::UserRepository;

pub struct DeleteUserCommand {
    pub id: i64,
}

impl Command for DeleteUserCommand {
    type Result = ();
}

pub struct DeleteUserHandler {
    users: Arc<dyn UserRepository>,
}

impl DeleteUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl CommandHandler<DeleteUserCommand> for DeleteUserHandler {
    async fn execute(&self, command: DeleteUserCommand) -> DomainResult<()> {
        if self.users.find_by_id(command.id).await?.is_none() {
            return Err(DomainError::not_found(format!(
                "user {} not found",
                command.id
            )));
        }

        let deleted = self.users.delete(command.id).await?;
        if !deleted {
            return Err(DomainError::unexpected("failed to delete user"));
        }
        Ok(())
    }
}
