//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// A name is the identity key of a record, so it is validated at
/// construction time and never mutated afterwards.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("John").unwrap();
/// assert_eq!(name.as_str(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty
    /// - All characters must be alphabetic
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is invalid.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !Self::is_valid(&name) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(name))
    }

    /// Validate name format.
    fn is_valid(name: &str) -> bool {
        !name.is_empty() && name.chars().all(char::is_alphabetic)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Value equality against raw strings
impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for Name {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = Name::new("John").unwrap();
        assert_eq!(name.as_str(), "John");
    }

    #[test]
    fn test_name_validates_format() {
        assert!(Name::new("").is_err());
        assert!(Name::new("John1").is_err());
        assert!(Name::new("John Doe").is_err());
        assert!(Name::new("John").is_ok());
        assert!(Name::new("Élodie").is_ok());
    }

    #[test]
    fn test_name_value_equality() {
        let name = Name::new("Jane").unwrap();
        assert_eq!(name, "Jane");
        assert_eq!(name, "Jane".to_string());
        assert_ne!(name, "jane");
    }

    #[test]
    fn test_name_display() {
        let name = Name::new("Jane").unwrap();
        assert_eq!(format!("{}", name), "Jane");
    }

    #[test]
    fn test_name_deserialization_invalid_fails() {
        let result: Result<Name, _> = serde_json::from_str("\"John 2nd\"");
        assert!(result.is_err());
    }
}
