//! CAPTCHA verification module

mod recaptcha;

pub use recaptcha::RecaptchaVerifier;
