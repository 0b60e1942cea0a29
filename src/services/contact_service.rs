//! Contact service layer.
//!
//! Business operations the command dispatcher calls. The service owns the
//! session's address book; the dispatcher holds the service and passes it by
//! reference to each command.

use crate::config::Config;
use crate::error::{ContactError, ContactResult};
use crate::matching::{MatchResult, NameMatcher};
use crate::models::{AddressBook, Contact, UpcomingBirthday};
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

/// Reply of `get_phone` when no contact has the name.
pub const CONTACT_NOT_FOUND: &str = "Contact not found";

/// Reply of `get_phone` when the contact has no phones.
pub const NO_PHONE: &str = "No phone";

/// Reply of `get_birthday` when the contact or its birthday is missing.
pub const BIRTHDAY_NOT_FOUND: &str = "Birthday not found";

/// Source of "today" for birthday queries.
pub type Clock = fn() -> NaiveDate;

/// Today in the local time zone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Contact service trait for business operations.
pub trait ContactService {
    /// Create a contact with an optional first phone and birthday and store it,
    /// replacing any contact with the same name.
    ///
    /// Nothing is stored if a value fails validation.
    fn add_record(
        &mut self,
        name: &str,
        phone: Option<&str>,
        birthday: Option<&str>,
    ) -> ContactResult<&Contact>;

    /// Replace the contact's first phone (or add one if it has none).
    ///
    /// Returns `false` when no contact has this name.
    fn change_phone(&mut self, name: &str, new_number: &str) -> ContactResult<bool>;

    /// First phone of the contact, or a fixed indicator.
    fn get_phone(&self, name: &str) -> String;

    /// Append a phone to an existing contact.
    fn add_phone(&mut self, name: &str, number: &str) -> ContactResult<()>;

    /// Remove a phone from an existing contact.
    fn remove_phone(&mut self, name: &str, number: &str) -> ContactResult<()>;

    /// Swap one phone of an existing contact for another.
    fn edit_phone(&mut self, name: &str, old_number: &str, new_number: &str) -> ContactResult<()>;

    /// Set the contact's birthday. Returns `false` when no contact has this name.
    fn add_birthday(&mut self, name: &str, date: &str) -> ContactResult<bool>;

    /// Birthday of the contact, or a fixed indicator.
    fn get_birthday(&self, name: &str) -> String;

    /// Birthdays falling within `window_days` from today.
    fn upcoming_birthdays(&self, window_days: u32) -> Vec<UpcomingBirthday>;

    /// Remove a contact, `None` when absent.
    fn delete(&mut self, name: &str) -> Option<Contact>;

    /// Fuzzy search by name or exact phone.
    fn search(&self, query: &str) -> Vec<MatchResult<'_>>;

    /// Display lines of all contacts.
    fn render_all(&self) -> String;

    /// All contacts as a JSON array.
    fn export_json(&self) -> serde_json::Result<String>;

    /// Read access to the underlying address book.
    fn address_book(&self) -> &AddressBook;
}

/// Default implementation of ContactService.
#[derive(Debug, Clone)]
pub struct ContactServiceImpl {
    book: AddressBook,
    matcher: NameMatcher,
    max_match_results: usize,
    match_confidence_threshold: u8,
    clock: Clock,
}

impl ContactServiceImpl {
    /// Create a service over an empty address book.
    pub fn new(config: &Config) -> Self {
        Self::with_book(AddressBook::new(), config)
    }

    /// Create a service over an existing address book.
    pub fn with_book(book: AddressBook, config: &Config) -> Self {
        Self {
            book,
            matcher: NameMatcher::new(),
            max_match_results: config.max_match_results,
            match_confidence_threshold: config.match_confidence_threshold,
            clock: local_today,
        }
    }

    /// Replace the source of "today", mainly for tests.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Consume the service and return its address book.
    pub fn into_book(self) -> AddressBook {
        self.book
    }

    fn existing_mut(&mut self, name: &str) -> ContactResult<&mut Contact> {
        self.book
            .find_mut(name)
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))
    }
}

impl Default for ContactServiceImpl {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ContactService for ContactServiceImpl {
    fn add_record(
        &mut self,
        name: &str,
        phone: Option<&str>,
        birthday: Option<&str>,
    ) -> ContactResult<&Contact> {
        let mut contact = Contact::new(name)?;
        if let Some(phone) = phone {
            contact.add_phone(phone)?;
        }
        if let Some(birthday) = birthday {
            contact.set_birthday(birthday)?;
        }

        info!(name = %name, "Storing contact");
        Ok(self.book.add_record(contact))
    }

    fn change_phone(&mut self, name: &str, new_number: &str) -> ContactResult<bool> {
        let Some(contact) = self.book.find_mut(name) else {
            debug!(name = %name, "change_phone on unknown contact");
            return Ok(false);
        };

        contact.set_primary_phone(new_number)?;
        Ok(true)
    }

    fn get_phone(&self, name: &str) -> String {
        match self.book.find(name) {
            Some(contact) => contact
                .phones()
                .first()
                .map(|phone| phone.to_string())
                .unwrap_or_else(|| NO_PHONE.to_string()),
            None => CONTACT_NOT_FOUND.to_string(),
        }
    }

    fn add_phone(&mut self, name: &str, number: &str) -> ContactResult<()> {
        self.existing_mut(name)?.add_phone(number)?;
        Ok(())
    }

    fn remove_phone(&mut self, name: &str, number: &str) -> ContactResult<()> {
        self.existing_mut(name)?.remove_phone(number)?;
        Ok(())
    }

    fn edit_phone(&mut self, name: &str, old_number: &str, new_number: &str) -> ContactResult<()> {
        self.existing_mut(name)?.edit_phone(old_number, new_number)
    }

    fn add_birthday(&mut self, name: &str, date: &str) -> ContactResult<bool> {
        match self.book.find_mut(name) {
            Some(contact) => {
                contact.set_birthday(date)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn get_birthday(&self, name: &str) -> String {
        self.book
            .find(name)
            .and_then(Contact::birthday)
            .map(|birthday| birthday.to_string())
            .unwrap_or_else(|| BIRTHDAY_NOT_FOUND.to_string())
    }

    fn upcoming_birthdays(&self, window_days: u32) -> Vec<UpcomingBirthday> {
        let today = (self.clock)();
        debug!(%today, window_days, "Collecting upcoming birthdays");
        self.book.upcoming_birthdays(window_days, today)
    }

    fn delete(&mut self, name: &str) -> Option<Contact> {
        self.book.delete(name)
    }

    fn search(&self, query: &str) -> Vec<MatchResult<'_>> {
        self.matcher.find_matches(
            query,
            &self.book,
            self.max_match_results,
            self.match_confidence_threshold,
        )
    }

    fn render_all(&self) -> String {
        self.book.render()
    }

    fn export_json(&self) -> serde_json::Result<String> {
        let contacts: Vec<&Contact> = self.book.iter().collect();
        serde_json::to_string_pretty(&contacts)
    }

    fn address_book(&self) -> &AddressBook {
        &self.book
    }
}
