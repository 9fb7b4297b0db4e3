use std::sync::Arc;

use async_trait::async_trait;
use chrono::Datelike;
use chrono::Duration;
use chrono::NaiveDate;
use chrono::Utc;

use crate::contact::errors::ContactError;
use crate::contact::models::Contact;
use crate::contact::models::ContactId;
use crate::contact::models::CreateContactCommand;
use crate::contact::models::Page;
use crate::contact::models::UpdateContactCommand;
use crate::contact::ports::ContactRepository;
use crate::contact::ports::ContactServicePort;
use crate::user::models::UserId;

/// Number of days ahead the birthday window looks.
const BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// Domain service implementation for contact operations.
pub struct ContactService<CR>
where
    CR: ContactRepository,
{
    repository: Arc<CR>,
}

impl<CR> ContactService<CR>
where
    CR: ContactRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

/// Next calendar occurrence of `birthday` on or after `today`.
///
/// Feb 29 birthdays only occur in leap years; in other years they fall
/// outside every window, matching the stored date literally.
fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    match birthday.with_year(today.year()) {
        Some(this_year) if this_year >= today => Some(this_year),
        _ => birthday.with_year(today.year() + 1),
    }
}

#[async_trait]
impl<CR> ContactServicePort for ContactService<CR>
where
    CR: ContactRepository,
{
    async fn create_contact(
        &self,
        owner: &UserId,
        command: CreateContactCommand,
    ) -> Result<Contact, ContactError> {
        let contact = Contact {
            id: ContactId::new(),
            owner_id: *owner,
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            phone: command.phone,
            birthday: command.birthday,
            additional_data: command.additional_data,
        };

        self.repository.create(contact).await
    }

    async fn get_contact(&self, owner: &UserId, id: &ContactId) -> Result<Contact, ContactError> {
        self.repository
            .find_by_id(owner, id)
            .await?
            .ok_or(ContactError::NotFound(id.to_string()))
    }

    async fn list_contacts(
        &self,
        owner: &UserId,
        page: Page,
    ) -> Result<Vec<Contact>, ContactError> {
        self.repository.list_by_owner(owner, page).await
    }

    async fn update_contact(
        &self,
        owner: &UserId,
        id: &ContactId,
        command: UpdateContactCommand,
    ) -> Result<Contact, ContactError> {
        let mut contact = self
            .repository
            .find_by_id(owner, id)
            .await?
            .ok_or(ContactError::NotFound(id.to_string()))?;

        if let Some(first_name) = command.first_name {
            contact.first_name = first_name;
        }
        if let Some(last_name) = command.last_name {
            contact.last_name = last_name;
        }
        if let Some(email) = command.email {
            contact.email = email;
        }
        if let Some(phone) = command.phone {
            contact.phone = phone;
        }
        if let Some(birthday) = command.birthday {
            contact.birthday = Some(birthday);
        }
        if let Some(additional_data) = command.additional_data {
            contact.additional_data = Some(additional_data);
        }

        self.repository.update(contact).await
    }

    async fn delete_contact(
        &self,
        owner: &UserId,
        id: &ContactId,
    ) -> Result<Contact, ContactError> {
        let contact = self
            .repository
            .find_by_id(owner, id)
            .await?
            .ok_or(ContactError::NotFound(id.to_string()))?;

        self.repository.delete(owner, id).await?;
        Ok(contact)
    }

    async fn search_contacts(
        &self,
        owner: &UserId,
        query: &str,
    ) -> Result<Vec<Contact>, ContactError> {
        self.repository.search(owner, query).await
    }

    async fn upcoming_birthdays(&self, owner: &UserId) -> Result<Vec<Contact>, ContactError> {
        let today = Utc::now().date_naive();
        let window_end = today + Duration::days(BIRTHDAY_WINDOW_DAYS);

        let contacts = self.repository.find_with_birthday(owner).await?;

        Ok(contacts
            .into_iter()
            .filter(|contact| {
                contact
                    .birthday
                    .and_then(|birthday| next_occurrence(birthday, today))
                    .map(|occurrence| occurrence <= window_end)
                    .unwrap_or(false)
            })
            .collect())
    }
}
