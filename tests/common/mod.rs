//! Shared helpers for integration tests.
//!
//! Provides a service pinned to a fixed "today" and assertions used across
//! the test files.

use contact_book::{Config, Contact, ContactServiceImpl};

pub mod fixtures;

/// Create a service whose clock always reports [`fixtures::reference_date`].
pub fn setup_service() -> ContactServiceImpl {
    ContactServiceImpl::new(&Config::default()).with_clock(fixtures::reference_date)
}

/// Assert the contact's phones, in order.
#[allow(dead_code)]
pub fn assert_phones(contact: &Contact, expected: &[&str]) {
    let phones: Vec<&str> = contact.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, expected, "Unexpected phones for {}", contact.name());
}
