//! Contact Book - an interactive assistant bot over an in-memory address book.
//!
//! Contacts carry a name, any number of validated phone numbers and an
//! optional birthday. The book answers "whose birthday is coming up" queries
//! and is driven by a line-oriented command loop.
//!
//! # Architecture
//!
//! - **domain**: Validated field value object and validation errors
//! - **models**: The contact record and the address book
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **matching**: Fuzzy name matching for the `search` command
//! - **services**: Business operations the bot commands call
//! - **commands**: Input parsing and command dispatch

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use commands::{dispatch, Command, Reply};
pub use config::Config;
pub use domain::{Field, FieldKind, ValidationError};
pub use error::{CommandError, ConfigError, ContactError};
pub use matching::{MatchResult, MatchType, NameMatcher};
pub use models::{AddressBook, Contact, UpcomingBirthday};
pub use services::{ContactService, ContactServiceImpl};
