//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
    Guest,
}

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: UserId,
    /// Username, unique within the store
    pub username: String,
    /// Email address, unique within the store
    pub email: String,
    /// Role of the account
    pub role: UserRole,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Whether the account is active
    pub is_active: bool,
}

impl User {
    /// Create a new active user with a server-generated id
    pub fn new(username: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: UserId::generate(),
            username: username.into(),
            email: email.into(),
            role,
            created_at: Utc::now(),
            is_active: true,
        }
    }

    /// Replace the generated id with a caller-supplied one
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("alice_w", "alice@example.com", UserRole::Admin);

        assert_eq!(user.username, "alice_w");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role, UserRole::Admin);
        assert!(user.is_active);
        assert!(!user.id.as_str().is_empty());
    }

    #[test]
    fn test_with_id_overrides_generated() {
        let user =
            User::new("bob_smith", "bob@example.com", UserRole::User).with_id(UserId::new("user_002"));

        assert_eq!(user.id.as_str(), "user_002");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(UserId::generate(), UserId::generate());
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&UserRole::Guest).unwrap();
        assert_eq!(json, "\"guest\"");

        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }
}
