//! Domain value objects and types.
//!
//! This module contains the validated field type used for contact names,
//! phone numbers and birthdays. Fields are validated at construction time so
//! invalid data cannot be represented in the system.

pub mod errors;
pub mod field;

pub use errors::ValidationError;
pub use field::{Field, FieldKind, BIRTHDAY_FORMAT, PHONE_LENGTH};
