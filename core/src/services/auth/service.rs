//! Main authentication service implementation

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::account::Account;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::captcha::CaptchaVerifierTrait;
use crate::services::notification::EmailServiceTrait;

use super::config::AuthServiceConfig;

/// Authentication service orchestrating registration, login, and
/// password recovery
///
/// All collaborators are injected; the service itself holds no connection
/// or configuration globals. Each invocation is independent and stateless
/// except for the account row it touches.
pub struct AuthService<A, C, N>
where
    A: AccountRepository,
    C: CaptchaVerifierTrait,
    N: EmailServiceTrait,
{
    /// Account repository for database operations
    account_repository: Arc<A>,
    /// CAPTCHA verification collaborator
    captcha_verifier: Arc<C>,
    /// Outbound email collaborator
    email_service: Arc<N>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<A, C, N> AuthService<A, C, N>
where
    A: AccountRepository,
    C: CaptchaVerifierTrait,
    N: EmailServiceTrait + 'static,
{
    /// Create a new authentication service
    pub fn new(
        account_repository: Arc<A>,
        captcha_verifier: Arc<C>,
        email_service: Arc<N>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            account_repository,
            captcha_verifier,
            email_service,
            config,
        }
    }

    /// Register a new account
    ///
    /// This method:
    /// 1. Verifies the CAPTCHA token (service fault and explicit non-success
    ///    are distinct terminal outcomes)
    /// 2. Hashes the password and inserts the account with a zeroed
    ///    failed-attempt counter
    /// 3. Dispatches a confirmation email as a fire-and-forget side effect
    ///    whose failure never changes the registered outcome
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The registered account
    /// * `Err(DomainError)` - CAPTCHA rejection, duplicate email, or store failure
    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        captcha_token: &str,
    ) -> DomainResult<Account> {
        // Step 1: CAPTCHA gate, before any store access
        self.check_captcha(captcha_token).await?;

        // Step 2: hash the password and persist the new account
        let password_hash =
            bcrypt::hash(password, self.config.bcrypt_cost).map_err(|e| DomainError::Internal {
                message: format!("Failed to hash password: {}", e),
            })?;

        let account = Account::new(
            email.to_string(),
            first_name.to_string(),
            last_name.to_string(),
            password_hash,
        );

        let account = self.account_repository.insert(account).await?;

        info!(email = %account.email, "Account registered");

        // Step 3: confirmation email, fire-and-forget relative to the response
        let email_service = Arc::clone(&self.email_service);
        let to = account.email.clone();
        let subject = self.config.confirmation_subject.clone();
        let body = self.config.confirmation_body.clone();
        tokio::spawn(async move {
            match email_service.send(&to, &subject, &body).await {
                Ok(message_id) => {
                    info!(%to, message_id, "Confirmation email sent");
                }
                Err(e) => {
                    warn!(%to, error = %e, "Failed to send confirmation email");
                }
            }
        });

        Ok(account)
    }

    /// Authenticate an account (the core state machine)
    ///
    /// Transition policy, evaluated strictly in this order:
    /// 1. CAPTCHA verification - short-circuits before any store access
    /// 2. Account lookup by email - no match is reported as the same
    ///    generic invalid-credentials outcome as a wrong password
    /// 3. Lockout check BEFORE the password comparison - a locked account
    ///    stays locked even on a correct password
    /// 4. Password check - mismatch increments the failed-attempt counter
    ///    by one (persistence failure is logged only)
    /// 5. Match - counter resets to zero (logged-only on failure)
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - Authenticated
    /// * `Err(DomainError)` - One of the terminal failure states
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        captcha_token: &str,
    ) -> DomainResult<Account> {
        // Step 1: CAPTCHA gate
        self.check_captcha(captcha_token).await?;

        // Step 2: account lookup
        let mut account = match self.account_repository.find_by_email(email).await? {
            Some(account) => account,
            None => {
                info!(email, "Login attempt for unknown email");
                return Err(DomainError::Auth(AuthError::InvalidCredentials));
            }
        };

        // Step 3: lockout check, before the password comparison
        if account.is_locked(self.config.max_failed_attempts) {
            warn!(
                email,
                failed_attempts = account.failed_attempts,
                "Login attempt against locked account"
            );
            return Err(DomainError::Auth(AuthError::AccountLocked));
        }

        // Step 4: password check
        let password_matches =
            bcrypt::verify(password, &account.password_hash).map_err(|e| {
                DomainError::Internal {
                    message: format!("Failed to verify password: {}", e),
                }
            })?;

        if !password_matches {
            let failed_attempts = account.failed_attempts + 1;
            // The outcome is already decided; a failed counter write is an
            // observability event only
            if let Err(e) = self
                .account_repository
                .update_failed_attempts(account.id, failed_attempts)
                .await
            {
                warn!(email, error = %e, "Failed to persist failed-attempt counter");
            }
            info!(email, failed_attempts, "Login failed: wrong password");
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        // Step 5: success, reset the counter
        if let Err(e) = self
            .account_repository
            .reset_failed_attempts(account.id)
            .await
        {
            warn!(email, error = %e, "Failed to reset failed-attempt counter");
        }
        // The returned entity reflects the reset, not the pre-login row
        account.failed_attempts = 0;

        info!(email, "Account authenticated");
        Ok(account)
    }

    /// Dispatch a password-recovery email
    ///
    /// The send is awaited: unlike the registration confirmation, a
    /// delivery fault here is the whole outcome of the request and is
    /// surfaced to the caller.
    pub async fn request_password_reset(&self, email: &str) -> DomainResult<()> {
        match self
            .email_service
            .send(
                email,
                &self.config.recovery_subject,
                &self.config.recovery_body,
            )
            .await
        {
            Ok(message_id) => {
                info!(email, message_id, "Recovery email sent");
                Ok(())
            }
            Err(e) => {
                warn!(email, error = %e, "Failed to send recovery email");
                Err(DomainError::Auth(AuthError::EmailDispatchFailed))
            }
        }
    }

    /// Run the CAPTCHA verification call and map its outcome
    ///
    /// A transport or service fault must never pass as CAPTCHA success.
    async fn check_captcha(&self, token: &str) -> DomainResult<()> {
        match self.captcha_verifier.verify(token).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                info!("CAPTCHA verification returned non-success");
                Err(DomainError::Auth(AuthError::CaptchaFailed))
            }
            Err(e) => {
                warn!(error = %e, "CAPTCHA verification call failed");
                Err(DomainError::Auth(AuthError::CaptchaServiceUnavailable))
            }
        }
    }
}
