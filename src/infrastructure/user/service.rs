//! User service for lookups, filtered listings and creation

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{DomainError, User, UserId, UserQuery, UserRepository, UserRole};

/// Inclusive bounds for the listing limit
const MIN_LIMIT: u32 = 1;
const MAX_LIMIT: u32 = 100;

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    /// Caller-supplied id; generated when absent
    pub id: Option<String>,
    pub username: String,
    pub email: String,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

/// User service over the entity store
#[derive(Debug)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Get a user by id
    pub async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        self.repository.find(&UserId::new(id)).await
    }

    /// List users matching the query, truncated to `limit`.
    ///
    /// `limit` outside 1..=100 is a caller contract violation and fails
    /// before the store is touched.
    pub async fn list(&self, query: &UserQuery, limit: u32) -> Result<Vec<User>, DomainError> {
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
            return Err(DomainError::invalid_argument(format!(
                "limit must be between {MIN_LIMIT} and {MAX_LIMIT}, got {limit}"
            )));
        }

        debug!(?query, limit, "Listing users");

        let mut users = self.repository.list(query).await?;
        users.truncate(limit as usize);
        Ok(users)
    }

    /// Count users matching the query
    pub async fn count(&self, query: &UserQuery) -> Result<usize, DomainError> {
        self.repository.count(query).await
    }

    /// Create a new user; uniqueness of username and email is enforced by
    /// the store at insertion time.
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        info!(username = %request.username, "Creating user");

        let mut user = User::new(
            request.username,
            request.email,
            request.role.unwrap_or_default(),
        );

        if let Some(id) = request.id {
            user = user.with_id(UserId::new(id));
        }

        if let Some(is_active) = request.is_active {
            user = user.with_active(is_active);
        }

        self.repository.insert(user).await
    }
}
