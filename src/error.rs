//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by contact and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A field failed validation; nothing was changed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The contact has no phone with this number
    #[error("Phone {phone} not found for contact {contact}")]
    PhoneNotFound { contact: String, phone: String },

    /// No contact is stored under this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors produced while interpreting a bot command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command word is not recognized
    #[error("Invalid command.")]
    UnknownCommand(String),

    /// Not enough arguments were supplied
    #[error("Insufficient arguments. Usage: {usage}")]
    MissingArguments { usage: &'static str },

    /// An argument could not be parsed
    #[error("Invalid argument {value}: {reason}")]
    InvalidArgument { value: String, reason: String },

    /// The underlying contact operation failed
    #[error(transparent)]
    Contact(#[from] ContactError),

    /// Contacts could not be rendered as JSON
    #[error("Export failed: {0}")]
    Export(String),
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::Export(err.to_string())
    }
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Contact(ContactError::Validation(err))
    }
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
