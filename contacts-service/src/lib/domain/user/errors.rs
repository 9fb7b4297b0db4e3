use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for confirmation-mail scheduling
#[derive(Debug, Clone, Error)]
pub enum MailerError {
    #[error("Failed to deliver confirmation mail: {0}")]
    DeliveryFailed(String),
}

/// Top-level error for all authentication operations.
///
/// The transport layer collapses the authentication sub-kinds
/// (`InvalidEmail` / `EmailNotConfirmed` / `InvalidPassword`) and every
/// credential rejection into one uniform unauthorized response; the distinct
/// variants exist for logging and for flows that react differently
/// (refresh vs. confirmation).
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Registration
    #[error("Account already exists: {0}")]
    Conflict(String),

    // Authentication sub-kinds
    #[error("Invalid email")]
    InvalidEmail,

    #[error("Email not confirmed")]
    EmailNotConfirmed,

    #[error("Invalid password")]
    InvalidPassword,

    // Token decode failures
    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is malformed: {0}")]
    TokenMalformed(String),

    #[error("Token scope mismatch")]
    TokenScopeMismatch,

    /// Decoded fine but does not match the stored one; presenting it has
    /// already revoked the stored token as a side effect.
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// Confirmation token's subject resolves to no principal.
    #[error("Verification error")]
    VerificationError,

    /// Access-token resolution failure on a protected request.
    #[error("Unauthorized")]
    Unauthorized,

    // Value object validation errors
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email address: {0}")]
    InvalidEmailAddress(#[from] EmailError),

    // Infrastructure errors
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token signing failed: {0}")]
    TokenSigning(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AuthError::TokenExpired,
            TokenError::ScopeMismatch { .. } => AuthError::TokenScopeMismatch,
            TokenError::Malformed(message) => AuthError::TokenMalformed(message),
            TokenError::EncodingFailed(message) => AuthError::TokenSigning(message),
        }
    }
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        AuthError::Hashing(err.to_string())
    }
}
