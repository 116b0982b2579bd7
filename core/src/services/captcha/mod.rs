//! CAPTCHA verification service integration

use async_trait::async_trait;

/// Trait for CAPTCHA verification service integration
///
/// One outbound call per verification, no retries. An empty or malformed
/// token comes back as `Ok(false)` (the remote service reports
/// non-success); `Err` is reserved for transport or service faults and is
/// never treated as CAPTCHA success by callers.
#[async_trait]
pub trait CaptchaVerifierTrait: Send + Sync {
    /// Verify a client-supplied challenge-response token
    async fn verify(&self, token: &str) -> Result<bool, String>;
}
