//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

use super::repository::AccountRepository;

/// In-memory account repository for tests
///
/// Every operation increments an internal counter so tests can assert that
/// certain flows never touch the store at all (e.g. after a failed CAPTCHA
/// check).
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
    operations: Arc<AtomicUsize>,
    fail_counter_updates: bool,
}

impl MockAccountRepository {
    /// Create an empty mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            operations: Arc::new(AtomicUsize::new(0)),
            fail_counter_updates: false,
        }
    }

    /// Create a mock repository seeded with an existing account
    pub async fn with_existing_account(account: Account) -> Self {
        let repo = Self::new();
        repo.accounts.write().await.insert(account.id, account);
        repo
    }

    /// Make counter updates fail, to exercise the logged-only persistence
    /// failure paths
    pub fn failing_counter_updates(mut self) -> Self {
        self.fail_counter_updates = true;
        self
    }

    /// Number of repository operations performed so far
    pub fn operation_count(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    /// Fetch an account snapshot by id
    pub async fn get(&self, id: Uuid) -> Option<Account> {
        self.accounts.read().await.get(&id).cloned()
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        self.operations.fetch_add(1, Ordering::SeqCst);
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn insert(&self, account: Account) -> Result<Account, DomainError> {
        self.operations.fetch_add(1, Ordering::SeqCst);
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.email == account.email) {
            return Err(DomainError::Database {
                message: format!("duplicate entry '{}' for key 'email'", account.email),
            });
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update_failed_attempts(
        &self,
        id: Uuid,
        failed_attempts: u32,
    ) -> Result<(), DomainError> {
        self.operations.fetch_add(1, Ordering::SeqCst);
        if self.fail_counter_updates {
            return Err(DomainError::Database {
                message: "connection lost".to_string(),
            });
        }

        let mut accounts = self.accounts.write().await;
        match accounts.get_mut(&id) {
            Some(account) => {
                account.failed_attempts = failed_attempts;
                account.updated_at = chrono::Utc::now();
                Ok(())
            }
            None => Err(DomainError::NotFound {
                resource: "Account".to_string(),
            }),
        }
    }

    async fn reset_failed_attempts(&self, id: Uuid) -> Result<(), DomainError> {
        self.operations.fetch_add(1, Ordering::SeqCst);
        if self.fail_counter_updates {
            return Err(DomainError::Database {
                message: "connection lost".to_string(),
            });
        }

        let mut accounts = self.accounts.write().await;
        match accounts.get_mut(&id) {
            Some(account) => {
                account.failed_attempts = 0;
                account.updated_at = chrono::Utc::now();
                Ok(())
            }
            None => Err(DomainError::NotFound {
                resource: "Account".to_string(),
            }),
        }
    }
}
