//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or contains non-alphabetic characters.
    InvalidName(String),

    /// The provided phone number is not exactly ten decimal digits.
    InvalidPhone(String),

    /// The provided birthday does not parse as a day.month.year date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => {
                write!(f, "Invalid name: '{}'. Names must be alphabetic", name)
            }
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number: '{}'. Expected exactly 10 digits",
                phone
            ),
            Self::InvalidBirthday(birthday) => write!(
                f,
                "Invalid birthday format: '{}'. Right birthday like this 28.12.1994",
                birthday
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
