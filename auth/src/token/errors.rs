use thiserror::Error;

use super::claims::TokenScope;

/// Error type for token encode/decode operations.
///
/// Decode failures are a three-way split because callers react differently:
/// an expired refresh token is a plain failure, while a well-formed token
/// presented with the wrong scope must never pass as either.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed or has an invalid signature: {0}")]
    Malformed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Invalid scope for token: expected {expected}, got {actual}")]
    ScopeMismatch {
        expected: TokenScope,
        actual: TokenScope,
    },
}
