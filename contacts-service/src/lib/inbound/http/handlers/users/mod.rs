pub mod get_current_user;
pub mod update_avatar;

pub use get_current_user::get_current_user;
pub use update_avatar::update_avatar;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::user::models::User;

/// Principal data as exposed to the API. Never includes the password hash
/// or the stored refresh token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub confirmed: bool,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            confirmed: user.confirmed,
            avatar: user.avatar.clone(),
            created_at: user.created_at,
        }
    }
}
