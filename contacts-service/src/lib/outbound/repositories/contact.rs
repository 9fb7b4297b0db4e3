use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::contact::errors::ContactError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::models::Page;
use crate::domain::contact::ports::ContactRepository;
use crate::domain::user::models::UserId;

pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContactRow {
    id: Uuid,
    owner_id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    birthday: Option<NaiveDate>,
    additional_data: Option<String>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Contact {
            id: ContactId(row.id),
            owner_id: UserId(row.owner_id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            birthday: row.birthday,
            additional_data: row.additional_data,
        }
    }
}

const CONTACT_COLUMNS: &str =
    "id, owner_id, first_name, last_name, email, phone, birthday, additional_data";

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn create(&self, contact: Contact) -> Result<Contact, ContactError> {
        sqlx::query(
            r#"
            INSERT INTO contacts (id, owner_id, first_name, last_name, email, phone, birthday, additional_data)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(contact.id.0)
        .bind(contact.owner_id.0)
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(contact.birthday)
        .bind(contact.additional_data.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        Ok(contact)
    }

    async fn find_by_id(
        &self,
        owner: &UserId,
        id: &ContactId,
    ) -> Result<Option<Contact>, ContactError> {
        let row: Option<ContactRow> = sqlx::query_as(&format!(
            "SELECT {} FROM contacts WHERE id = $1 AND owner_id = $2",
            CONTACT_COLUMNS
        ))
        .bind(id.0)
        .bind(owner.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        Ok(row.map(Contact::from))
    }

    async fn list_by_owner(
        &self,
        owner: &UserId,
        page: Page,
    ) -> Result<Vec<Contact>, ContactError> {
        let rows: Vec<ContactRow> = sqlx::query_as(&format!(
            "SELECT {} FROM contacts WHERE owner_id = $1 ORDER BY last_name, first_name OFFSET $2 LIMIT $3",
            CONTACT_COLUMNS
        ))
        .bind(owner.0)
        .bind(page.skip)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }

    async fn update(&self, contact: Contact) -> Result<Contact, ContactError> {
        let result = sqlx::query(
            r#"
            UPDATE contacts
            SET first_name = $3, last_name = $4, email = $5, phone = $6, birthday = $7, additional_data = $8
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(contact.id.0)
        .bind(contact.owner_id.0)
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(contact.birthday)
        .bind(contact.additional_data.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ContactError::NotFound(contact.id.to_string()));
        }

        Ok(contact)
    }

    async fn delete(&self, owner: &UserId, id: &ContactId) -> Result<(), ContactError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1 AND owner_id = $2")
            .bind(id.0)
            .bind(owner.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ContactError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn search(&self, owner: &UserId, query: &str) -> Result<Vec<Contact>, ContactError> {
        let pattern = format!("%{}%", query);

        let rows: Vec<ContactRow> = sqlx::query_as(&format!(
            r#"
            SELECT {} FROM contacts
            WHERE owner_id = $1
              AND (first_name ILIKE $2 OR last_name ILIKE $2 OR email ILIKE $2)
            ORDER BY last_name, first_name
            "#,
            CONTACT_COLUMNS
        ))
        .bind(owner.0)
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }

    async fn find_with_birthday(&self, owner: &UserId) -> Result<Vec<Contact>, ContactError> {
        let rows: Vec<ContactRow> = sqlx::query_as(&format!(
            "SELECT {} FROM contacts WHERE owner_id = $1 AND birthday IS NOT NULL",
            CONTACT_COLUMNS
        ))
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }
}
