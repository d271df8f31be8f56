use crate::domain::Contact;
use crate::errors::AppError;

/// The in-memory collection of contacts, in insertion order.
///
/// Every contact in a book passes [`Contact::validate`], and no two are the
/// same contact (see [`Contact::is_same_contact`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    contacts: Vec<Contact>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from loose contacts, rejecting invalid or repeated ones.
    pub fn from_contacts(contacts: Vec<Contact>) -> Result<Self, AppError> {
        let mut book = AddressBook::new();
        for contact in contacts {
            book.add_contact(contact)?;
        }
        Ok(book)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contains(&self, contact: &Contact) -> bool {
        self.contacts.iter().any(|c| c.is_same_contact(contact))
    }

    /// Appends `contact` unless it is invalid or already in the book.
    pub fn add_contact(&mut self, contact: Contact) -> Result<(), AppError> {
        contact.validate()?;
        if self.contains(&contact) {
            return Err(AppError::DuplicateContact(contact.name));
        }
        self.contacts.push(contact);
        Ok(())
    }

    /// Removes the exact contact given, as previously shown to the user.
    pub fn remove_contact(&mut self, contact: &Contact) -> Result<Contact, AppError> {
        match self.contacts.iter().position(|c| c == contact) {
            Some(index) => Ok(self.contacts.remove(index)),
            None => Err(AppError::NotFound("Contact".to_string())),
        }
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    /// Contacts whose name contains any of the keywords as a whole word.
    pub fn find_by_name_keywords(&self, keywords: &[&str]) -> Vec<Contact> {
        self.contacts
            .iter()
            .filter(|c| {
                c.name
                    .split_whitespace()
                    .any(|word| keywords.contains(&word))
            })
            .cloned()
            .collect()
    }
}
