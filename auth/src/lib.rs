//! Credential and token primitives for the contacts API.
//!
//! Two building blocks, free of persistence and transport concerns:
//! - Password hashing (Argon2id)
//! - Signed, expiring, scope-tagged tokens
//!
//! The service crate composes these into the full authentication flows;
//! this crate only knows how to hash, sign, and verify.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! assert!(!hasher.verify("guess", &digest));
//! ```
//!
//! ## Scoped Tokens
//! ```
//! use auth::{TokenCodec, TokenScope};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec
//!     .encode("alice@example.com", TokenScope::Access, Duration::minutes(15))
//!     .unwrap();
//! let subject = codec.decode(&token, TokenScope::Access).unwrap();
//! assert_eq!(subject, "alice@example.com");
//!
//! // A token never crosses scopes
//! assert!(codec.decode(&token, TokenScope::Refresh).is_err());
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
pub use token::TokenScope;
