//! Authentication error types
//!
//! These errors represent the terminal failure states of the registration,
//! login, and password-recovery flows. User-facing messages are assigned in
//! the presentation layer; credential failures are deliberately generic
//! there to avoid account enumeration.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The CAPTCHA challenge was answered but verification returned
    /// non-success (includes empty or malformed tokens)
    #[error("CAPTCHA verification failed")]
    CaptchaFailed,

    /// The CAPTCHA verification service could not be reached or returned
    /// a transport-level error; never treated as CAPTCHA success
    #[error("CAPTCHA service unavailable")]
    CaptchaServiceUnavailable,

    /// Unknown email or wrong password; the two cases are intentionally
    /// indistinguishable to the caller
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The failed-attempt counter reached the lockout threshold
    #[error("Account locked")]
    AccountLocked,

    /// Outbound email could not be dispatched
    #[error("Email dispatch failed")]
    EmailDispatchFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
        assert_eq!(AuthError::AccountLocked.to_string(), "Account locked");
        assert_eq!(
            AuthError::CaptchaServiceUnavailable.to_string(),
            "CAPTCHA service unavailable"
        );
    }
}
