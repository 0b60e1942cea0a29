//! Application service layer.
//!
//! Services contain the business logic behind the bot commands and provide a
//! clean boundary between the command dispatcher and the address book.

mod contact_service;

pub use contact_service::{
    local_today, Clock, ContactService, ContactServiceImpl, BIRTHDAY_NOT_FOUND,
    CONTACT_NOT_FOUND, NO_PHONE,
};

// Re-export common types used by services
pub use crate::models::{AddressBook, Contact, UpcomingBirthday};
