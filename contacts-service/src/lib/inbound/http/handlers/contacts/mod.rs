pub mod create_contact;
pub mod delete_contact;
pub mod get_contact;
pub mod list_contacts;
pub mod search_contacts;
pub mod upcoming_birthdays;
pub mod update_contact;

pub use create_contact::create_contact;
pub use delete_contact::delete_contact;
pub use get_contact::get_contact;
pub use list_contacts::list_contacts;
pub use search_contacts::search_contacts;
pub use upcoming_birthdays::upcoming_birthdays;
pub use update_contact::update_contact;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::contact::models::Contact;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactData {
    pub id: String,
    pub owner_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birthday: Option<NaiveDate>,
    pub additional_data: Option<String>,
}

impl From<&Contact> for ContactData {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.to_string(),
            owner_id: contact.owner_id.to_string(),
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            birthday: contact.birthday,
            additional_data: contact.additional_data.clone(),
        }
    }
}
