use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::user::models::UserId;

/// Contact aggregate entity, always scoped to an owning principal.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: ContactId,
    pub owner_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birthday: Option<NaiveDate>,
    pub additional_data: Option<String>,
}

/// Contact unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(pub Uuid);

impl ContactId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new contact for an owner.
#[derive(Debug)]
pub struct CreateContactCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birthday: Option<NaiveDate>,
    pub additional_data: Option<String>,
}

/// Command to update an existing contact.
///
/// All fields are optional to support partial updates.
#[derive(Debug, Default)]
pub struct UpdateContactCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub additional_data: Option<String>,
}

/// Offset/limit pagination window for contact listings.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
        }
    }
}
