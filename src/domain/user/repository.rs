//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use super::query::UserQuery;
use crate::domain::DomainError;

/// Repository trait for user storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by id
    async fn find(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Get a user by exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Get a user by exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Insert a new user.
    ///
    /// Fails with `Conflict` if the username or email is already present.
    async fn insert(&self, user: User) -> Result<User, DomainError>;

    /// List users matching the query, in insertion order
    async fn list(&self, query: &UserQuery) -> Result<Vec<User>, DomainError>;

    /// Count users matching the query
    async fn count(&self, query: &UserQuery) -> Result<usize, DomainError> {
        Ok(self.list(query).await?.len())
    }
}
