//! Contact model representing one person in the address book.

use crate::domain::{Field, ValidationError};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Raw contact data as it appears in JSON, validated on conversion.
#[derive(Debug, Clone, Deserialize)]
struct ContactData {
    name: String,
    #[serde(default)]
    phones: Vec<String>,
    #[serde(default)]
    birthday: Option<String>,
}

/// A contact: a name, zero or more phone numbers and an optional birthday.
///
/// The name is fixed at creation and is the key the address book stores the
/// contact under. Every phone and birthday held here has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactData")]
pub struct Contact {
    /// Name of the contact
    name: Field,

    /// Phone numbers in insertion order, duplicates allowed
    phones: Vec<Field>,

    /// Birthday, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Field>,
}

impl TryFrom<ContactData> for Contact {
    type Error = ValidationError;

    fn try_from(data: ContactData) -> Result<Self, Self::Error> {
        let mut contact = Contact::new(data.name)?;
        for phone in data.phones {
            contact.add_phone(phone)?;
        }
        if let Some(birthday) = data.birthday {
            contact.set_birthday(birthday)?;
        }
        Ok(contact)
    }
}

impl Contact {
    /// Create a contact with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Field::name(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Create a contact with an initial birthday.
    pub fn with_birthday(
        name: impl Into<String>,
        birthday: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let mut contact = Self::new(name)?;
        contact.set_birthday(birthday)?;
        Ok(contact)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[Field] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Field> {
        self.birthday.as_ref()
    }

    /// Validate `number` and append it to the phone list.
    ///
    /// On error the phone list is left untouched.
    pub fn add_phone(&mut self, number: impl Into<String>) -> Result<&Field, ValidationError> {
        let phone = Field::phone(number)?;
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(&self.phones[self.phones.len() - 1])
    }

    /// Find a phone by exact match on its value.
    pub fn find_phone(&self, number: &str) -> Option<&Field> {
        self.phones.iter().find(|phone| phone.as_str() == number)
    }

    /// Remove the first phone whose value equals `number`.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, number: &str) -> ContactResult<Field> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == number)
            .ok_or_else(|| self.phone_not_found(number))?;
        debug!(contact = %self.name, phone = number, "Removing phone");
        Ok(self.phones.remove(index))
    }

    /// Replace `old_number` with `new_number`.
    ///
    /// The new number is appended and the first match of the old one removed.
    /// Either both happen or the phone list is unchanged.
    ///
    /// # Errors
    ///
    /// - `ContactError::PhoneNotFound` if `old_number` is not present
    /// - `ContactError::Validation` if `new_number` is malformed
    pub fn edit_phone(&mut self, old_number: &str, new_number: &str) -> ContactResult<()> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old_number)
            .ok_or_else(|| self.phone_not_found(old_number))?;
        let replacement = Field::phone(new_number)?;

        debug!(
            contact = %self.name,
            old = old_number,
            new = new_number,
            "Editing phone"
        );
        self.phones.push(replacement);
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the first phone in place, or add it when there is none.
    ///
    /// The list is untouched if `number` is invalid.
    pub fn set_primary_phone(&mut self, number: impl Into<String>) -> Result<(), ValidationError> {
        let phone = Field::phone(number)?;
        debug!(contact = %self.name, phone = %phone, "Setting primary phone");
        match self.phones.first_mut() {
            Some(primary) => *primary = phone,
            None => self.phones.push(phone),
        }
        Ok(())
    }

    /// Validate and replace the birthday.
    pub fn set_birthday(&mut self, date: impl Into<String>) -> Result<(), ValidationError> {
        let birthday = Field::birthday(date)?;
        debug!(contact = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    fn phone_not_found(&self, number: &str) -> ContactError {
        ContactError::PhoneNotFound {
            contact: self.name.to_string(),
            phone: number.to_string(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Field::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
