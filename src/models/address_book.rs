//! Address book holding every contact of a session.

use super::contact::Contact;
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Window used by the birthday query when none is given.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Birthday exactly as stored (`DD.MM.YYYY`)
    pub birthday: String,

    /// The birthday moved onto the reference year
    #[serde(skip)]
    pub date: NaiveDate,
}

/// Name-keyed collection of contacts.
///
/// Names are unique. Enumeration follows insertion order, and overwriting an
/// existing name keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    contacts: Vec<Contact>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `contact` under its name, replacing any contact already there.
    pub fn add_record(&mut self, contact: Contact) -> &mut Contact {
        let name = contact.name().to_string();
        let existing = self.index.get(&name).copied();
        let slot = match existing {
            Some(slot) => {
                debug!(name = %name, "Replacing existing contact");
                self.contacts[slot] = contact;
                slot
            }
            None => {
                debug!(name = %name, "Adding contact");
                self.contacts.push(contact);
                let slot = self.contacts.len() - 1;
                self.index.insert(name, slot);
                slot
            }
        };
        &mut self.contacts[slot]
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.index.get(name).map(|&slot| &self.contacts[slot])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        let slot = *self.index.get(name)?;
        Some(&mut self.contacts[slot])
    }

    /// Remove and return the contact stored under `name`.
    ///
    /// A missing name is a normal outcome and yields `None`.
    pub fn delete(&mut self, name: &str) -> Option<Contact> {
        let slot = self.index.remove(name)?;
        let contact = self.contacts.remove(slot);
        for position in self.index.values_mut() {
            if *position > slot {
                *position -= 1;
            }
        }
        debug!(name = %name, "Deleted contact");
        Some(contact)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterate over contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// Contacts whose birthday, moved onto the year of `reference`, falls in
    /// `[reference, reference + window_days]`.
    ///
    /// Results follow store order. A 29 February birthday is moved to
    /// 28 February when the reference year is not a leap year. Dates are not
    /// wrapped into the following year.
    pub fn upcoming_birthdays(
        &self,
        window_days: u32,
        reference: NaiveDate,
    ) -> Vec<UpcomingBirthday> {
        let window_end = reference
            .checked_add_days(Days::new(u64::from(window_days)))
            .unwrap_or(NaiveDate::MAX);

        self.contacts
            .iter()
            .filter_map(|contact| {
                let birthday = contact.birthday()?;
                let date = project_onto_year(birthday.as_date()?, reference.year())?;
                (reference <= date && date <= window_end).then(|| UpcomingBirthday {
                    name: contact.name().to_string(),
                    birthday: birthday.to_string(),
                    date,
                })
            })
            .collect()
    }

    /// Every contact's display line followed by a newline.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn project_onto_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), date.day() - 1))
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for contact in &self.contacts {
            writeln!(f, "{}", contact)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
