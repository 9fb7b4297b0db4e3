use async_trait::async_trait;

use crate::user::errors::AuthError;
use crate::user::errors::MailerError;
use crate::user::models::ConfirmOutcome;
use crate::user::models::RegisterUserCommand;
use crate::user::models::TokenPair;
use crate::user::models::User;
use crate::user::models::UserId;

/// Port for the authentication service.
///
/// Everything the transport layer may ask of the auth core; each operation
/// recovers into a typed `AuthError`, never an unhandled fault.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new principal.
    ///
    /// # Errors
    /// * `Conflict` - A principal with this email already exists
    /// * `DatabaseError` - Persistence failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, AuthError>;

    /// Verify credentials and issue a fresh access/refresh pair.
    ///
    /// Checks run in order: existence, confirmed flag, password. The new
    /// refresh token replaces any previously stored one.
    ///
    /// # Errors
    /// * `InvalidEmail` - No principal with this email
    /// * `EmailNotConfirmed` - Principal has not confirmed their email
    /// * `InvalidPassword` - Password hash check failed
    async fn authenticate(&self, email: &str, password: &str) -> Result<TokenPair, AuthError>;

    /// Rotate a refresh token into a new access/refresh pair.
    ///
    /// Presenting a refresh token other than the stored one revokes the
    /// stored one and fails; the old token is dead after every rotation.
    ///
    /// # Errors
    /// * `TokenExpired` / `TokenMalformed` / `TokenScopeMismatch` - Decode failure
    /// * `InvalidRefreshToken` - Token does not match the stored one (stored token cleared)
    async fn refresh(&self, presented_refresh_token: &str) -> Result<TokenPair, AuthError>;

    /// Mark the token's subject as confirmed. Idempotent: a second call with
    /// a still-valid token reports `AlreadyConfirmed` without mutation.
    ///
    /// # Errors
    /// * `TokenExpired` / `TokenMalformed` / `TokenScopeMismatch` - Decode failure
    /// * `VerificationError` - Subject resolves to no principal
    async fn confirm_email(&self, token: &str) -> Result<ConfirmOutcome, AuthError>;

    /// Resolve the acting principal from an access token.
    ///
    /// Runs on every protected request: one decode, one lookup, no hashing.
    ///
    /// # Errors
    /// * `TokenExpired` / `TokenMalformed` / `TokenScopeMismatch` - Decode failure
    /// * `Unauthorized` - Subject resolves to no principal
    async fn resolve_principal(&self, access_token: &str) -> Result<User, AuthError>;

    /// Sign a one-time email-confirmation token for `email`.
    async fn issue_confirmation_token(&self, email: &str) -> Result<String, AuthError>;

    /// Look up a principal by email (confirmation re-send flow).
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Store a new avatar reference on the principal.
    async fn update_avatar(&self, email: &str, url: &str) -> Result<User, AuthError>;
}

/// Persistence operations for the principal aggregate.
///
/// Each operation is assumed transactional at the single-row level; the
/// rotation/replay check relies on per-principal update serialization from
/// the backing store.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new principal.
    ///
    /// # Errors
    /// * `Conflict` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Retrieve a principal by email (None if not found).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Flip the email-confirmation flag to true.
    async fn set_confirmed(&self, email: &str) -> Result<(), AuthError>;

    /// Replace or clear the stored refresh token.
    async fn set_refresh_token(&self, id: &UserId, token: Option<String>)
        -> Result<(), AuthError>;

    /// Store an avatar reference and return the updated principal.
    async fn set_avatar(&self, email: &str, url: &str) -> Result<User, AuthError>;
}

/// Outbound confirmation-mail delivery.
///
/// The auth core never sends mail itself; callers schedule delivery through
/// this port after registration or a re-send request.
#[async_trait]
pub trait ConfirmationMailer: Send + Sync + 'static {
    /// Deliver a confirmation link for `token` to `recipient`.
    async fn send_confirmation(
        &self,
        recipient: &str,
        username: &str,
        token: &str,
    ) -> Result<(), MailerError>;
}
