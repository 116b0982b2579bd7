//! Configuration for the authentication service

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Failed attempts at which an account locks (default: 3)
    pub max_failed_attempts: u32,

    /// Bcrypt cost factor for new password hashes
    pub bcrypt_cost: u32,

    /// Subject line of the registration confirmation email
    pub confirmation_subject: String,

    /// Body of the registration confirmation email
    pub confirmation_body: String,

    /// Subject line of the password-recovery email
    pub recovery_subject: String,

    /// Body of the password-recovery email
    pub recovery_body: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            max_failed_attempts: 3,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            confirmation_subject: "Registration confirmation".to_string(),
            confirmation_body: "Thank you for registering!".to_string(),
            recovery_subject: "Password recovery".to_string(),
            recovery_body: "Here is the link to reset your password".to_string(),
        }
    }
}

impl AuthServiceConfig {
    /// Configuration for tests: minimum bcrypt cost to keep hashing fast
    pub fn for_tests() -> Self {
        Self {
            bcrypt_cost: 4,
            ..Default::default()
        }
    }
}
