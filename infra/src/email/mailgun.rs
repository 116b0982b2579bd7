//! Mailgun email delivery client.
//!
//! Sends messages through Mailgun's HTTP API using basic auth with the
//! literal username `api` and the account API key.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use ag_core::services::notification::EmailServiceTrait;
use ag_shared::config::EmailConfig;

/// Response payload from the Mailgun messages endpoint
#[derive(Debug, Deserialize)]
struct MailgunResponse {
    id: String,
    #[allow(dead_code)]
    message: String,
}

/// Email service backed by the Mailgun HTTP API
pub struct MailgunEmailService {
    client: Client,
    config: EmailConfig,
}

impl MailgunEmailService {
    /// Create a new Mailgun email service from configuration
    pub fn new(config: EmailConfig) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/{}/messages",
            self.config.base_url.trim_end_matches('/'),
            self.config.domain
        )
    }
}

#[async_trait]
impl EmailServiceTrait for MailgunEmailService {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        let params = [
            ("from", self.config.from_email.as_str()),
            ("to", to),
            ("subject", subject),
            ("text", body),
        ];

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth("api", Some(&self.config.api_key))
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Mailgun request failed");
                format!("Mailgun request failed: {}", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, detail = %detail, "Mailgun rejected the message");
            return Err(format!("Mailgun returned status {}", status));
        }

        let parsed: MailgunResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse Mailgun response");
            format!("Failed to parse Mailgun response: {}", e)
        })?;

        tracing::info!(message_id = %parsed.id, "Email accepted by Mailgun");

        Ok(parsed.id)
    }
}
