use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::AuthError;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    confirmed: bool,
    refresh_token: Option<String>,
    avatar: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = AuthError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId(row.id),
            username: Username::new(row.username)?,
            email: EmailAddress::new(row.email)?,
            password_hash: row.password_hash,
            confirmed: row.confirmed,
            refresh_token: row.refresh_token,
            avatar: row.avatar,
            created_at: row.created_at,
        })
    }
}

const USER_COLUMNS: &str =
    "id, username, email, password_hash, confirmed, refresh_token, avatar, created_at";

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, AuthError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, confirmed, refresh_token, avatar, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.confirmed)
        .bind(user.refresh_token.as_deref())
        .bind(user.avatar.as_deref())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AuthError::Conflict(user.email.to_string());
                }
            }
            AuthError::DatabaseError(e.to_string())
        })?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    async fn set_confirmed(&self, email: &str) -> Result<(), AuthError> {
        sqlx::query("UPDATE users SET confirmed = TRUE WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn set_refresh_token(
        &self,
        id: &UserId,
        token: Option<String>,
    ) -> Result<(), AuthError> {
        // Single-row UPDATE: Postgres row locking serializes concurrent
        // rotations on the same principal.
        sqlx::query("UPDATE users SET refresh_token = $2 WHERE id = $1")
            .bind(id.0)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn set_avatar(&self, email: &str, url: &str) -> Result<User, AuthError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "UPDATE users SET avatar = $2 WHERE email = $1 RETURNING {}",
            USER_COLUMNS
        ))
        .bind(email)
        .bind(url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        row.map(User::try_from)
            .transpose()?
            .ok_or(AuthError::Unauthorized)
    }
}
