pub mod confirm_email;
pub mod login;
pub mod refresh_token;
pub mod request_email;
pub mod signup;

pub use confirm_email::confirm_email;
pub use login::login;
pub use refresh_token::refresh_token;
pub use request_email::request_email;
pub use signup::signup;

use serde::Serialize;

use crate::user::models::TokenPair;

/// Login and refresh both answer with this bearer-credential envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

impl From<TokenPair> for TokenResponseData {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: "bearer".to_string(),
        }
    }
}
