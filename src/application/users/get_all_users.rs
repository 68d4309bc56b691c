use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dispatcher::{Query, QueryHandler};
use crate::application::projections::UserView;
use crate::domain::error::DomainResult;
use crate::domain::repository::UserRepository;

pub struct GetAllUsersQuery;

impl Query for GetAllUsersQuery {
    type Result = Vec<UserView>;
}

pub struct GetAllUsersHandler {
    users: Arc<dyn UserRepository>,
}

impl GetAllUsersHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl QueryHandler<GetAllUsersQuery> for GetAllUsersHandler {
    async fn execute(&self, _query: GetAllUsersQuery) -> DomainResult<Vec<UserView>> {
        let users = self.users.find_all().await?;
        Ok(users.into_iter().map(UserView::from).collect())
    }
}
