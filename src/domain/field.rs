//! Validated field value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// Date format used for birthdays (`DD.MM.YYYY`).
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono accepts unpadded day/month, so the shape is checked separately.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// Earliest year a birthday may carry; year 0 is not a calendar year here.
pub const MIN_BIRTHDAY_YEAR: i32 = 1;

/// Number of digits in a valid phone number.
pub const PHONE_LENGTH: usize = 10;

type Validator = fn(&str) -> Result<(), ValidationError>;

/// The kind of value a [`Field`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Contact name, any non-empty string.
    Name,

    /// Phone number, exactly ten ASCII digits.
    Phone,

    /// Birthday in `DD.MM.YYYY` form, must be a real calendar date.
    Birthday,
}

impl FieldKind {
    /// Look up the validation rule for this kind.
    fn validator(self) -> Validator {
        match self {
            FieldKind::Name => validate_name,
            FieldKind::Phone => validate_phone,
            FieldKind::Birthday => validate_birthday,
        }
    }

    /// Human readable label for the kind.
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Phone => "phone",
            FieldKind::Birthday => "birthday",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn validate_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if value.len() == PHONE_LENGTH && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone(value.to_string()))
    }
}

fn validate_birthday(value: &str) -> Result<(), ValidationError> {
    parse_birthday(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::InvalidBirthday(value.to_string()))
}

fn parse_birthday(value: &str) -> Option<NaiveDate> {
    if !BIRTHDAY_SHAPE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
        .ok()
        .filter(|date| date.year() >= MIN_BIRTHDAY_YEAR)
}

/// A single validated scalar value tagged with its [`FieldKind`].
///
/// A field always holds a value satisfying its kind's rule. There are no
/// setters; editing a field means building a new one.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Field, FieldKind};
///
/// let phone = Field::new(FieldKind::Phone, "0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(Field::new(FieldKind::Phone, "050-123").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    kind: FieldKind,
    value: String,
}

impl Field {
    /// Create a new field, running the validator for `kind`.
    ///
    /// # Errors
    ///
    /// Returns the kind-specific `ValidationError` when the value is rejected.
    pub fn new(kind: FieldKind, value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        (kind.validator())(&value)?;
        Ok(Self { kind, value })
    }

    /// Shorthand for `Field::new(FieldKind::Name, value)`.
    pub fn name(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(FieldKind::Name, value)
    }

    /// Shorthand for `Field::new(FieldKind::Phone, value)`.
    pub fn phone(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(FieldKind::Phone, value)
    }

    /// Shorthand for `Field::new(FieldKind::Birthday, value)`.
    pub fn birthday(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(FieldKind::Birthday, value)
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Get the raw value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }

    /// The calendar date of a birthday field, `None` for other kinds.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self.kind {
            FieldKind::Birthday => parse_birthday(&self.value),
            _ => None,
        }
    }
}

// Serde support - serialize as the raw string
impl Serialize for Field {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
