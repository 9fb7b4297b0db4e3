use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenCodec;
use auth::TokenScope;
use chrono::Duration;
use chrono::Utc;

use crate::user::errors::AuthError;
use crate::user::models::ConfirmOutcome;
use crate::user::models::RegisterUserCommand;
use crate::user::models::TokenPair;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Lifetimes for the three token kinds. Configuration, not protocol:
/// access tokens just have to be short-lived relative to refresh tokens.
#[derive(Debug, Clone, Copy)]
pub struct TokenTtls {
    pub access: Duration,
    pub refresh: Duration,
    pub confirmation: Duration,
}

impl Default for TokenTtls {
    fn default() -> Self {
        Self {
            access: Duration::minutes(15),
            refresh: Duration::days(7),
            confirmation: Duration::hours(72),
        }
    }
}

/// Authentication service: credential hashing, token lifecycle, and
/// principal resolution over an injected persistence port.
///
/// Stateless beyond the signing secret and TTLs fixed at construction;
/// safe for unbounded concurrent use. The only shared mutable state is the
/// principal's stored refresh token, which the repository updates atomically
/// per row.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    ttls: TokenTtls,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create the service with an injected repository and signing secret.
    ///
    /// Secret strength is enforced at config load; by the time this runs the
    /// secret is known to be acceptable.
    pub fn new(repository: Arc<UR>, jwt_secret: &[u8], ttls: TokenTtls) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(jwt_secret),
            ttls,
        }
    }

    fn issue_pair(&self, subject: &str) -> Result<TokenPair, AuthError> {
        let access_token = self
            .token_codec
            .encode(subject, TokenScope::Access, self.ttls.access)?;
        let refresh_token = self
            .token_codec
            .encode(subject, TokenScope::Refresh, self.ttls.refresh)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, AuthError> {
        if let Some(existing) = self.repository.find_by_email(command.email.as_str()).await? {
            return Err(AuthError::Conflict(existing.email.to_string()));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            confirmed: false,
            refresh_token: None,
            avatar: None,
            created_at: Utc::now(),
        };

        self.repository.create(user).await
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<TokenPair, AuthError> {
        // Check order is fixed: existence, confirmed flag, password.
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidEmail)?;

        if !user.confirmed {
            return Err(AuthError::EmailNotConfirmed);
        }

        if !self.password_hasher.verify(password, &user.password_hash) {
            return Err(AuthError::InvalidPassword);
        }

        let pair = self.issue_pair(user.email.as_str())?;
        self.repository
            .set_refresh_token(&user.id, Some(pair.refresh_token.clone()))
            .await?;

        Ok(pair)
    }

    async fn refresh(&self, presented_refresh_token: &str) -> Result<TokenPair, AuthError> {
        let subject = self
            .token_codec
            .decode(presented_refresh_token, TokenScope::Refresh)?;

        let user = self
            .repository
            .find_by_email(&subject)
            .await?
            .ok_or(AuthError::InvalidRefreshToken)?;

        // Replay detection: any token other than the stored one, including a
        // previously valid rotated-away one, revokes the stored token and
        // logs the principal out.
        if user.refresh_token.as_deref() != Some(presented_refresh_token) {
            tracing::warn!(user_id = %user.id, "Refresh token replay detected, revoking session");
            self.repository.set_refresh_token(&user.id, None).await?;
            return Err(AuthError::InvalidRefreshToken);
        }

        let pair = self.issue_pair(user.email.as_str())?;
        self.repository
            .set_refresh_token(&user.id, Some(pair.refresh_token.clone()))
            .await?;

        Ok(pair)
    }

    async fn confirm_email(&self, token: &str) -> Result<ConfirmOutcome, AuthError> {
        let subject = self
            .token_codec
            .decode(token, TokenScope::EmailConfirmation)?;

        let user = self
            .repository
            .find_by_email(&subject)
            .await?
            .ok_or(AuthError::VerificationError)?;

        if user.confirmed {
            return Ok(ConfirmOutcome::AlreadyConfirmed);
        }

        self.repository.set_confirmed(user.email.as_str()).await?;
        Ok(ConfirmOutcome::Confirmed)
    }

    async fn resolve_principal(&self, access_token: &str) -> Result<User, AuthError> {
        let subject = self.token_codec.decode(access_token, TokenScope::Access)?;

        self.repository
            .find_by_email(&subject)
            .await?
            .ok_or(AuthError::Unauthorized)
    }

    async fn issue_confirmation_token(&self, email: &str) -> Result<String, AuthError> {
        Ok(self.token_codec.encode(
            email,
            TokenScope::EmailConfirmation,
            self.ttls.confirmation,
        )?)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        self.repository.find_by_email(email).await
    }

    async fn update_avatar(&self, email: &str, url: &str) -> Result<User, AuthError> {
        self.repository.set_avatar(email, url).await
    }
}
