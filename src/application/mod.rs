// Application layer: one immutable command/query per intent, one handler per
// message, and the buses that route between them.

pub mod comments;
pub mod dispatcher;
pub mod posts;
pub mod projections;
pub mod users;
