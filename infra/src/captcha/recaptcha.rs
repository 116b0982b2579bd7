//! Google reCAPTCHA verification client.
//!
//! Posts the client token to the siteverify endpoint and reports the
//! verdict. Transport failures and non-2xx responses are surfaced as
//! errors so callers never mistake a service fault for a pass. A single
//! attempt is made per token; tokens are one-shot on Google's side, so
//! retrying would fail anyway.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use ag_core::services::captcha::CaptchaVerifierTrait;
use ag_shared::config::CaptchaConfig;

/// Response payload from the siteverify endpoint
#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    success: bool,
    #[serde(rename = "error-codes", default)]
    error_codes: Vec<String>,
}

/// reCAPTCHA verifier backed by Google's siteverify API
pub struct RecaptchaVerifier {
    client: Client,
    config: CaptchaConfig,
}

impl RecaptchaVerifier {
    /// Create a new verifier from configuration
    pub fn new(config: CaptchaConfig) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl CaptchaVerifierTrait for RecaptchaVerifier {
    async fn verify(&self, token: &str) -> Result<bool, String> {
        let params = [
            ("secret", self.config.secret_key.as_str()),
            ("response", token),
        ];

        let response = self
            .client
            .post(&self.config.verify_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "reCAPTCHA request failed");
                format!("reCAPTCHA request failed: {}", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(status = %status, "reCAPTCHA service returned an error status");
            return Err(format!("reCAPTCHA service returned status {}", status));
        }

        let verdict: SiteVerifyResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse reCAPTCHA response");
            format!("Failed to parse reCAPTCHA response: {}", e)
        })?;

        if !verdict.success && !verdict.error_codes.is_empty() {
            tracing::debug!(
                error_codes = ?verdict.error_codes,
                "reCAPTCHA verification did not succeed"
            );
        }

        Ok(verdict.success)
    }
}
