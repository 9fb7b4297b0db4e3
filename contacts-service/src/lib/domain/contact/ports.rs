use async_trait::async_trait;

use crate::contact::errors::ContactError;
use crate::contact::models::Contact;
use crate::contact::models::ContactId;
use crate::contact::models::CreateContactCommand;
use crate::contact::models::Page;
use crate::contact::models::UpdateContactCommand;
use crate::user::models::UserId;

/// Port for contact domain service operations.
///
/// Every operation takes the owning principal's id; a contact is never
/// visible outside its owner's scope.
#[async_trait]
pub trait ContactServicePort: Send + Sync + 'static {
    /// Create a new contact for `owner`.
    async fn create_contact(
        &self,
        owner: &UserId,
        command: CreateContactCommand,
    ) -> Result<Contact, ContactError>;

    /// Retrieve one of `owner`'s contacts.
    ///
    /// # Errors
    /// * `NotFound` - No such contact within the owner's scope
    async fn get_contact(&self, owner: &UserId, id: &ContactId) -> Result<Contact, ContactError>;

    /// List `owner`'s contacts with offset/limit pagination.
    async fn list_contacts(&self, owner: &UserId, page: Page) -> Result<Vec<Contact>, ContactError>;

    /// Apply a partial update to one of `owner`'s contacts.
    ///
    /// # Errors
    /// * `NotFound` - No such contact within the owner's scope
    async fn update_contact(
        &self,
        owner: &UserId,
        id: &ContactId,
        command: UpdateContactCommand,
    ) -> Result<Contact, ContactError>;

    /// Delete one of `owner`'s contacts, returning the removed entity.
    ///
    /// # Errors
    /// * `NotFound` - No such contact within the owner's scope
    async fn delete_contact(&self, owner: &UserId, id: &ContactId)
        -> Result<Contact, ContactError>;

    /// Case-insensitive substring search over first name, last name, and email.
    async fn search_contacts(
        &self,
        owner: &UserId,
        query: &str,
    ) -> Result<Vec<Contact>, ContactError>;

    /// Contacts whose birthday falls within the next seven days.
    async fn upcoming_birthdays(&self, owner: &UserId) -> Result<Vec<Contact>, ContactError>;
}

/// Persistence operations for the contact aggregate.
#[async_trait]
pub trait ContactRepository: Send + Sync + 'static {
    /// Persist a new contact.
    async fn create(&self, contact: Contact) -> Result<Contact, ContactError>;

    /// Retrieve a contact by id within an owner's scope (None if not found).
    async fn find_by_id(
        &self,
        owner: &UserId,
        id: &ContactId,
    ) -> Result<Option<Contact>, ContactError>;

    /// Retrieve an owner's contacts with offset/limit pagination.
    async fn list_by_owner(&self, owner: &UserId, page: Page) -> Result<Vec<Contact>, ContactError>;

    /// Update an existing contact in storage.
    async fn update(&self, contact: Contact) -> Result<Contact, ContactError>;

    /// Remove a contact within an owner's scope.
    ///
    /// # Errors
    /// * `NotFound` - Contact does not exist for this owner
    async fn delete(&self, owner: &UserId, id: &ContactId) -> Result<(), ContactError>;

    /// ILIKE substring search over first name, last name, and email.
    async fn search(&self, owner: &UserId, query: &str) -> Result<Vec<Contact>, ContactError>;

    /// Retrieve an owner's contacts that have a birthday on record.
    async fn find_with_birthday(&self, owner: &UserId) -> Result<Vec<Contact>, ContactError>;
}
