//! Outbound notification (email) service integration

use async_trait::async_trait;

/// Trait for email delivery integration
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send an email, returning the provider message id on success
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String>;
}
