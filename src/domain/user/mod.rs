pub mod entity;
pub mod query;
pub mod repository;

pub use entity::{User, UserId, UserRole};
pub use query::UserQuery;
pub use repository::UserRepository;
