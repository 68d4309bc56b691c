mod create_user;
mod delete_user;
mod get_all_users;
mod get_user_by_id;
mod update_user;

pub use create_user::{CreateUserCommand, CreateUserHandler};
pub use delete_user::{DeleteUserCommand, DeleteUserHandler};
pub use get_all_users::{GetAllUsersHandler, GetAllUsersQuery};
pub use get_user_by_id::{GetUserByIdHandler, GetUserByIdQuery};
pub use update_user::{UpdateUserCommand, UpdateUserHandler};
