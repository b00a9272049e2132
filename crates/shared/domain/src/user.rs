//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned user identifier
pub type UserId = u64;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<Utc>,
    pub location_of_birth: String,
}

impl User {
    /// Build a user from creation data and an assigned id
    pub fn from_new(id: UserId, new_user: NewUser) -> Self {
        Self {
            id,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            date_of_birth: new_user.date_of_birth,
            location_of_birth: new_user.location_of_birth,
        }
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Birth timestamp (RFC 3339 when serialized)
    pub date_of_birth: DateTime<Utc>,
    /// Place of birth
    pub location_of_birth: String,
}

impl NewUser {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: DateTime<Utc>,
        location_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
            location_of_birth: location_of_birth.into(),
        }
    }
}

/// Drops the id; stores assign their own.
impl From<User> for NewUser {
    fn from(user: User) -> Self {
        Self {
            first_name: user.first_name,
            last_name: user.last_name,
            date_of_birth: user.date_of_birth,
            location_of_birth: user.location_of_birth,
        }
    }
}
