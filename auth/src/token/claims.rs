use std::fmt;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Purpose tag baked into every token.
///
/// A token is only ever valid for the single purpose it was issued with;
/// the codec rejects any cross-scope use at decode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenScope {
    /// Short-lived credential for protected requests.
    #[serde(rename = "access_token")]
    Access,

    /// Long-lived rotating credential for minting new pairs.
    #[serde(rename = "refresh_token")]
    Refresh,

    /// One-time email-confirmation credential.
    #[serde(rename = "email_token")]
    EmailConfirmation,
}

impl fmt::Display for TokenScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenScope::Access => "access_token",
            TokenScope::Refresh => "refresh_token",
            TokenScope::EmailConfirmation => "email_token",
        };
        s.fmt(f)
    }
}

/// Token payload: subject, scope, and the two timestamps.
///
/// Immutable once issued; validity is determined purely by signature and
/// expiry at verification time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (principal's email)
    pub sub: String,

    /// Purpose tag
    pub scope: TokenScope,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for `subject` expiring `ttl` from now.
    pub fn new(subject: impl Into<String>, scope: TokenScope, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            scope,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}
