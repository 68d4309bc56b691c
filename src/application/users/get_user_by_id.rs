use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dispatcher::{Query, QueryHandler};
use crate::application::projections::UserView;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repository::UserRepository;

pub struct GetUserByIdQuery {
    pub id: i64,
}

impl Query for GetUserByIdQuery {
    type Result = UserView;
}

pub struct GetUserByIdHandler {
    users: Arc<dyn UserRepository>,
}

impl GetUserByIdHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl QueryHandler<GetUserByIdQuery> for GetUserByIdHandler {
    async fn execute(&self, query: GetUserByIdQuery) -> DomainResult<UserView> {
        self.users
            .find_by_id(query.id)
            .await?
            .map(UserView::from)
            .ok_or_else(|| DomainError::not_found(format!("user {} not found", query.id)))
    }
}
