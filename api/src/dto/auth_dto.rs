use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    #[validate(length(min = 1))]
    pub captcha_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 1))]
    pub captcha_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email)]
    pub email: String,
}

/// Metadata served to the registration and login forms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptchaFormResponse {
    pub site_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_valid() {
        let request = RegisterRequest {
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            email: "ana@example.com".to_string(),
            password: "correct-horse".to_string(),
            captcha_token: "tok".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let request = RegisterRequest {
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            email: "not-an-email".to_string(),
            password: "correct-horse".to_string(),
            captcha_token: "tok".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_register_request_rejects_short_password() {
        let request = RegisterRequest {
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            email: "ana@example.com".to_string(),
            password: "short".to_string(),
            captcha_token: "tok".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_login_request_requires_captcha_token() {
        let request = LoginRequest {
            email: "ana@example.com".to_string(),
            password: "whatever".to_string(),
            captcha_token: "".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("captcha_token"));
    }

    #[test]
    fn test_forgot_password_request_validates_email() {
        let valid = ForgotPasswordRequest {
            email: "ana@example.com".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = ForgotPasswordRequest {
            email: "nope".to_string(),
        };
        assert!(invalid.validate().is_err());
    }
}
