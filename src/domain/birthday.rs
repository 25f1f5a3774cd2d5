//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Input format for birthdays, e.g. "28.12.1994".
const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays.
///
/// The raw `day.month.year` string is kept for display and round-trip
/// fidelity; the parsed [`NaiveDate`] backs day-count arithmetic.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("19.10.2004").unwrap();
/// assert_eq!(birthday.as_str(), "19.10.2004");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string does not
    /// parse under the strict `day.month.year` format.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = birthday.into();

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { raw, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Get the birthday as the original string slice.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Days from `today` until the next occurrence of this birthday's
    /// month and day, rolling over to next year once this year's
    /// occurrence has passed. A birthday falling on `today` counts as 0.
    pub fn days_until_next(&self, today: NaiveDate) -> i64 {
        // Feb 29 only exists in leap years, and the century rule can
        // push the next one up to eight years out (2096 -> 2104), so
        // scan forward for the first year that actually contains the
        // date.
        for year in today.year()..=today.year() + 8 {
            if let Some(next) = NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day()) {
                if next >= today {
                    return (next - today).num_days();
                }
            }
        }
        unreachable!("a month/day taken from a valid date recurs within 8 years")
    }
}

// Value equality against raw strings
impl PartialEq<str> for Birthday {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for Birthday {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}

impl PartialEq<String> for Birthday {
    fn eq(&self, other: &String) -> bool {
        &self.raw == other
    }
}

// Serde support - serialize as the original string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
