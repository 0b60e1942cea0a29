//! Test fixtures and sample data.

use chrono::{Days, NaiveDate};
use contact_book::Contact;

/// The "today" used by every integration test: 10 June 2024.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).expect("valid fixture date")
}

/// `reference_date()` shifted by `offset` days, as a `DD.MM.YYYY` string in
/// the given birth year.
#[allow(dead_code)]
pub fn birthday_offset(offset: i64, birth_year: i32) -> String {
    let shifted = if offset >= 0 {
        reference_date() + Days::new(offset as u64)
    } else {
        reference_date() - Days::new(offset.unsigned_abs())
    };
    format!("{}.{}", shifted.format("%d.%m"), birth_year)
}

/// A contact with the given phones.
#[allow(dead_code)]
pub fn sample_contact(name: &str, phones: &[&str]) -> Contact {
    let mut contact = Contact::new(name).expect("valid fixture name");
    for phone in phones {
        contact.add_phone(*phone).expect("valid fixture phone");
    }
    contact
}
