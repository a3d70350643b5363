pub mod memory;

use crate::domain::{
    contact::{Contact, ContactUpdate, is_valid_phone_number},
    search,
};
use crate::errors::AppError;
use memory::MemStore;
use tracing::{debug, warn};

/// The phone book: contacts keyed by name, kept in insertion order.
#[derive(Debug, Default)]
pub struct ContactStore {
    mem: MemStore,
}

impl ContactStore {
    pub fn new() -> Self {
        Self {
            mem: MemStore::new(),
        }
    }

    /// Inserts a new contact at the end of the listing.
    ///
    /// The name is checked for emptiness first, then for duplication, then the
    /// phone number is validated. Empty email or address values are stored as
    /// absent.
    pub fn add(
        &mut self,
        name: String,
        phone: String,
        email: Option<String>,
        address: Option<String>,
    ) -> Result<(), AppError> {
        if name.trim().is_empty() {
            warn!("rejected contact with empty name");
            return Err(AppError::InvalidName);
        }

        if self.mem.position(&name).is_some() {
            warn!(%name, "rejected duplicate contact");
            return Err(AppError::DuplicateName(name));
        }

        if !is_valid_phone_number(&phone) {
            warn!(%name, %phone, "rejected invalid phone number");
            return Err(AppError::InvalidPhoneNumber(phone));
        }

        debug!(%name, "contact added");
        self.mem.push(Contact::new(name, phone, email, address));
        Ok(())
    }

    /// Overwrites the supplied fields of an existing contact. A rejected phone
    /// number leaves every field untouched.
    pub fn edit(&mut self, name: &str, update: ContactUpdate) -> Result<(), AppError> {
        let update = update.normalized();

        let Some(contact) = self.mem.get_mut(name) else {
            warn!(%name, "edit of unknown contact");
            return Err(AppError::NotFound(name.to_string()));
        };

        if let Some(phone) = &update.phone
            && !is_valid_phone_number(phone)
        {
            warn!(%name, %phone, "rejected invalid phone number");
            return Err(AppError::InvalidPhoneNumber(phone.clone()));
        }

        if update.is_empty() {
            debug!(%name, "edit with no fields supplied");
            return Ok(());
        }

        contact.apply(update);
        debug!(%name, "contact updated");
        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> Result<Contact, AppError> {
        match self.mem.remove(name) {
            Some(contact) => {
                debug!(%name, "contact deleted");
                Ok(contact)
            }
            None => {
                warn!(%name, "delete of unknown contact");
                Err(AppError::NotFound(name.to_string()))
            }
        }
    }

    /// Contacts with any field containing `query`, in insertion order.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        search::filter_contacts(&self.mem, query)
    }

    /// All contacts, by name when `sorted` and in insertion order otherwise.
    pub fn list(&self, sorted: bool) -> Vec<&Contact> {
        let mut contacts: Vec<&Contact> = self.mem.iter().collect();
        if sorted {
            contacts.sort_by(|a, b| a.name.cmp(&b.name));
        }
        contacts
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.mem.get(name)
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }
}
