//! Account entity representing a registered user of the website.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account entity representing a registered user
///
/// The email address is the unique identifier used for lookups.
/// `failed_attempts` counts consecutive failed password checks and is
/// reset to zero only on successful authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Email address, unique lookup key
    pub email: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Bcrypt hash of the account password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Number of consecutive failed login attempts
    pub failed_attempts: u32,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new Account with a zeroed failed-attempt counter
    pub fn new(
        email: String,
        first_name: String,
        last_name: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            first_name,
            last_name,
            password_hash,
            failed_attempts: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether the account is locked out given the lockout threshold.
    ///
    /// This is evaluated before any password comparison: an account that
    /// reached the threshold stays locked even when the next attempt
    /// carries the correct password.
    pub fn is_locked(&self, max_failed_attempts: u32) -> bool {
        self.failed_attempts >= max_failed_attempts
    }
}
