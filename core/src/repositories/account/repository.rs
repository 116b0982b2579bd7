//! Account repository trait defining the interface for account persistence.
//!
//! The trait is async-first and uses Result types for proper error handling.
//! Implementations handle the actual database operations while maintaining
//! the abstraction boundary between domain and infrastructure layers.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its email address
    ///
    /// The email is a unique key, so at most one account matches.
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with the given email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Insert a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account
    /// * `Err(DomainError)` - Insert failed (duplicate email, connectivity loss)
    async fn insert(&self, account: Account) -> Result<Account, DomainError>;

    /// Persist a new failed-attempt counter value for an account
    ///
    /// A failure here must not escalate past the call site: the login
    /// outcome has already been decided when this runs, so callers treat
    /// errors as observability events only.
    async fn update_failed_attempts(
        &self,
        id: Uuid,
        failed_attempts: u32,
    ) -> Result<(), DomainError>;

    /// Reset the failed-attempt counter to zero after successful
    /// authentication
    ///
    /// Same logged-only failure contract as `update_failed_attempts`.
    async fn reset_failed_attempts(&self, id: Uuid) -> Result<(), DomainError>;
}
