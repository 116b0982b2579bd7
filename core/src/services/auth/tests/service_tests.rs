//! Authentication service behavior tests

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::account::Account;
use crate::errors::{AuthError, DomainError};
use crate::repositories::MockAccountRepository;
use crate::services::auth::{AuthService, AuthServiceConfig};

use super::mocks::{MockCaptchaVerifier, MockEmailService};

const PASSWORD: &str = "p";
const WRONG_PASSWORD: &str = "q";

fn test_hash(password: &str) -> String {
    bcrypt::hash(password, 4).unwrap()
}

fn account_with_attempts(email: &str, failed_attempts: u32) -> Account {
    let mut account = Account::new(
        email.to_string(),
        "Ada".to_string(),
        "Lovelace".to_string(),
        test_hash(PASSWORD),
    );
    account.failed_attempts = failed_attempts;
    account
}

fn build_service(
    repository: Arc<MockAccountRepository>,
    captcha: MockCaptchaVerifier,
    email: Arc<MockEmailService>,
) -> AuthService<MockAccountRepository, MockCaptchaVerifier, MockEmailService> {
    AuthService::new(
        repository,
        Arc::new(captcha),
        email,
        AuthServiceConfig::for_tests(),
    )
}

// --- Login: counter policy ---

#[tokio::test]
async fn wrong_password_increments_counter_by_one() {
    for initial in [0u32, 1, 2] {
        let account = account_with_attempts("a@x.com", initial);
        let id = account.id;
        let repo = Arc::new(MockAccountRepository::with_existing_account(account).await);
        let service = build_service(
            Arc::clone(&repo),
            MockCaptchaVerifier::passing(),
            Arc::new(MockEmailService::new()),
        );

        let result = service.login("a@x.com", WRONG_PASSWORD, "token").await;

        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::InvalidCredentials))
        ));
        assert_eq!(repo.get(id).await.unwrap().failed_attempts, initial + 1);
    }
}

#[tokio::test]
async fn locked_account_rejects_even_correct_password() {
    for password in [PASSWORD, WRONG_PASSWORD] {
        let account = account_with_attempts("a@x.com", 3);
        let id = account.id;
        let repo = Arc::new(MockAccountRepository::with_existing_account(account).await);
        let service = build_service(
            Arc::clone(&repo),
            MockCaptchaVerifier::passing(),
            Arc::new(MockEmailService::new()),
        );

        let result = service.login("a@x.com", password, "token").await;

        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::AccountLocked))
        ));
        // The lockout check runs before the password comparison, so the
        // counter is never touched
        assert_eq!(repo.get(id).await.unwrap().failed_attempts, 3);
    }
}

#[tokio::test]
async fn correct_password_resets_counter() {
    for initial in [0u32, 1, 2] {
        let account = account_with_attempts("a@x.com", initial);
        let id = account.id;
        let repo = Arc::new(MockAccountRepository::with_existing_account(account).await);
        let service = build_service(
            Arc::clone(&repo),
            MockCaptchaVerifier::passing(),
            Arc::new(MockEmailService::new()),
        );

        let authenticated = service.login("a@x.com", PASSWORD, "token").await.unwrap();

        // Both the stored row and the returned entity reflect the reset
        assert_eq!(authenticated.failed_attempts, 0);
        assert_eq!(repo.get(id).await.unwrap().failed_attempts, 0);
    }
}

#[tokio::test]
async fn third_failure_then_lockout_scenario() {
    // Account {id: "a@x.com", failed_attempts: 2, secret: "p"}
    let account = account_with_attempts("a@x.com", 2);
    let id = account.id;
    let repo = Arc::new(MockAccountRepository::with_existing_account(account).await);
    let service = build_service(
        Arc::clone(&repo),
        MockCaptchaVerifier::passing(),
        Arc::new(MockEmailService::new()),
    );

    // Wrong password "q" with valid captcha: invalid credentials, counter -> 3
    let result = service.login("a@x.com", WRONG_PASSWORD, "token").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert_eq!(repo.get(id).await.unwrap().failed_attempts, 3);

    // Now at 3, the correct password "p" is still locked out, counter stays 3
    let result = service.login("a@x.com", PASSWORD, "token").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AccountLocked))
    ));
    assert_eq!(repo.get(id).await.unwrap().failed_attempts, 3);
}

#[tokio::test]
async fn unknown_email_yields_invalid_credentials_without_mutation() {
    let repo = Arc::new(MockAccountRepository::new());
    let service = build_service(
        Arc::clone(&repo),
        MockCaptchaVerifier::passing(),
        Arc::new(MockEmailService::new()),
    );

    let result = service.login("nobody@x.com", PASSWORD, "token").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    // Only the lookup itself touched the store
    assert_eq!(repo.operation_count(), 1);
}

#[tokio::test]
async fn counter_persistence_failure_does_not_change_outcome() {
    // Failed counter writes are observability events only; the decided
    // outcome survives on both the increment and the reset path
    let account = account_with_attempts("a@x.com", 1);
    let repo = Arc::new(
        MockAccountRepository::with_existing_account(account)
            .await
            .failing_counter_updates(),
    );
    let service = build_service(
        Arc::clone(&repo),
        MockCaptchaVerifier::passing(),
        Arc::new(MockEmailService::new()),
    );

    let result = service.login("a@x.com", WRONG_PASSWORD, "token").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));

    let result = service.login("a@x.com", PASSWORD, "token").await;
    assert!(result.is_ok());
}

// --- CAPTCHA gating ---

#[tokio::test]
async fn captcha_failure_short_circuits_before_store_access() {
    let account = account_with_attempts("a@x.com", 0);
    let repo = Arc::new(MockAccountRepository::with_existing_account(account).await);
    let service = build_service(
        Arc::clone(&repo),
        MockCaptchaVerifier::failing(),
        Arc::new(MockEmailService::new()),
    );

    let result = service.login("a@x.com", PASSWORD, "token").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::CaptchaFailed))
    ));
    assert_eq!(repo.operation_count(), 0);
}

#[tokio::test]
async fn captcha_service_fault_is_never_treated_as_success() {
    let repo = Arc::new(MockAccountRepository::new());
    let service = build_service(
        Arc::clone(&repo),
        MockCaptchaVerifier::unavailable(),
        Arc::new(MockEmailService::new()),
    );

    let result = service.login("a@x.com", PASSWORD, "token").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::CaptchaServiceUnavailable))
    ));
    assert_eq!(repo.operation_count(), 0);
}

// --- Registration ---

#[tokio::test]
async fn registration_stores_account_and_sends_confirmation() {
    let repo = Arc::new(MockAccountRepository::new());
    let email = Arc::new(MockEmailService::new());
    let service = build_service(
        Arc::clone(&repo),
        MockCaptchaVerifier::passing(),
        Arc::clone(&email),
    );

    let account = service
        .register("Ada", "Lovelace", "a@x.com", PASSWORD, "token")
        .await
        .unwrap();

    assert_eq!(account.failed_attempts, 0);
    assert!(bcrypt::verify(PASSWORD, &account.password_hash).unwrap());
    assert!(repo.get(account.id).await.is_some());

    // Confirmation mail is dispatched on a spawned task
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(email.sent_count(), 1);
    assert_eq!(email.sent.lock().unwrap()[0].0, "a@x.com");
}

#[tokio::test]
async fn duplicate_registration_fails_without_email() {
    let existing = account_with_attempts("a@x.com", 0);
    let repo = Arc::new(MockAccountRepository::with_existing_account(existing).await);
    let email = Arc::new(MockEmailService::new());
    let service = build_service(
        Arc::clone(&repo),
        MockCaptchaVerifier::passing(),
        Arc::clone(&email),
    );

    let result = service
        .register("Ada", "Lovelace", "a@x.com", PASSWORD, "token")
        .await;

    assert!(matches!(result, Err(DomainError::Database { .. })));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(email.sent_count(), 0);
}

#[tokio::test]
async fn registration_captcha_failure_never_touches_store() {
    let repo = Arc::new(MockAccountRepository::new());
    let email = Arc::new(MockEmailService::new());
    let service = build_service(
        Arc::clone(&repo),
        MockCaptchaVerifier::failing(),
        Arc::clone(&email),
    );

    let result = service
        .register("Ada", "Lovelace", "a@x.com", PASSWORD, "token")
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::CaptchaFailed))
    ));
    assert_eq!(repo.operation_count(), 0);
    assert_eq!(email.sent_count(), 0);
}

#[tokio::test]
async fn confirmation_email_failure_keeps_registered_outcome() {
    let repo = Arc::new(MockAccountRepository::new());
    let service = build_service(
        Arc::clone(&repo),
        MockCaptchaVerifier::passing(),
        Arc::new(MockEmailService::failing()),
    );

    let result = service
        .register("Ada", "Lovelace", "a@x.com", PASSWORD, "token")
        .await;

    assert!(result.is_ok());
}

// --- Password recovery ---

#[tokio::test]
async fn password_reset_dispatches_recovery_email() {
    let email = Arc::new(MockEmailService::new());
    let service = build_service(
        Arc::new(MockAccountRepository::new()),
        MockCaptchaVerifier::passing(),
        Arc::clone(&email),
    );

    service.request_password_reset("a@x.com").await.unwrap();

    assert_eq!(email.sent_count(), 1);
    let sent = email.sent.lock().unwrap();
    assert_eq!(sent[0].0, "a@x.com");
    assert_eq!(sent[0].1, "Password recovery");
}

#[tokio::test]
async fn password_reset_surfaces_dispatch_failure() {
    let service = build_service(
        Arc::new(MockAccountRepository::new()),
        MockCaptchaVerifier::passing(),
        Arc::new(MockEmailService::failing()),
    );

    let result = service.request_password_reset("a@x.com").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmailDispatchFailed))
    ));
}
