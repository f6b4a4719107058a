//! Filter predicates for user listings

use serde::{Deserialize, Serialize};

use super::entity::{User, UserRole};

/// Composable predicate set for filtering users.
///
/// Absent predicates are skipped; supplied predicates are ANDed. Filtering
/// never reorders the collection, so output preserves insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserQuery {
    /// Keep only users with this role
    pub role: Option<UserRole>,
    /// Keep only active users
    pub active_only: bool,
}

impl UserQuery {
    pub fn matches(&self, user: &User) -> bool {
        if let Some(role) = self.role {
            if user.role != role {
                return false;
            }
        }

        if self.active_only && !user.is_active {
            return false;
        }

        true
    }
}
