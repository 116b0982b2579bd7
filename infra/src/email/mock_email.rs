//! Log-only email service for local development and testing.
//!
//! Records message content to the log instead of calling a provider.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use uuid::Uuid;

use ag_core::services::notification::EmailServiceTrait;

/// Email service that logs messages instead of sending them
pub struct MockEmailService {
    sent_count: AtomicU64,
    simulate_failure: AtomicBool,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self {
            sent_count: AtomicU64::new(0),
            simulate_failure: AtomicBool::new(false),
        }
    }

    /// Toggle failure simulation for testing error paths
    pub fn set_simulate_failure(&self, fail: bool) {
        self.simulate_failure.store(fail, Ordering::SeqCst);
    }

    /// Number of messages accepted so far
    pub fn sent_count(&self) -> u64 {
        self.sent_count.load(Ordering::SeqCst)
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            return Err("Simulated email delivery failure".to_string());
        }

        let message_id = format!("<mock-{}@localhost>", Uuid::new_v4());
        self.sent_count.fetch_add(1, Ordering::SeqCst);

        tracing::info!(
            to = %to,
            subject = %subject,
            body = %body,
            message_id = %message_id,
            "Mock email delivered"
        );

        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_send_returns_message_id() {
        let service = MockEmailService::new();

        let id = service
            .send("user@example.com", "Hello", "Body text")
            .await
            .unwrap();

        assert!(id.starts_with("<mock-"));
        assert_eq!(service.sent_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_simulated_failure() {
        let service = MockEmailService::new();
        service.set_simulate_failure(true);

        let result = service.send("user@example.com", "Hello", "Body").await;

        assert!(result.is_err());
        assert_eq!(service.sent_count(), 0);
    }
}
