//! Data models for the contact book.
//!
//! This module contains the contact record and the address book that owns
//! every contact for a session.

pub mod address_book;
pub mod contact;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use contact::Contact;
