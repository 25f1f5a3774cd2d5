//! Record model representing a single contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::RecordError;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A contact: one name, an ordered set of unique phone numbers, and an
/// optional birthday.
///
/// The name is the record's identity and is fixed at construction. All
/// field values are validated before any state changes, so a failed
/// operation leaves the record untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    // Always serialized as a plain Option: bincode's format is not
    // self-describing, so skipping empty fields would not round-trip.
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with the given name and no phones.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Create a new record with a name and a birthday.
    pub fn new_with_birthday(
        name: impl Into<String>,
        birthday: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: Some(Birthday::new(birthday)?),
        })
    }

    /// The record's identity key.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Adding a number that is
    /// already present is a silent no-op.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        Ok(())
    }

    /// Remove a phone number.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if the number is absent.
    pub fn remove_phone(&mut self, phone: &str) -> Result<(), RecordError> {
        match self.phones.iter().position(|p| p == phone) {
            Some(index) => {
                self.phones.remove(index);
                Ok(())
            }
            None => Err(RecordError::PhoneNotFound(phone.to_string())),
        }
    }

    /// Replace `old` with `new` atomically: `new` is validated and `old`
    /// located before anything changes, so on failure the phone list is
    /// left exactly as it was.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), RecordError> {
        let new = Phone::new(new)?;

        let index = self
            .phones
            .iter()
            .position(|p| p == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;

        self.phones.remove(index);
        if !self.phones.contains(&new) {
            self.phones.push(new);
        }
        Ok(())
    }

    /// Find a phone number by its raw value.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Validate and set the birthday, replacing any prior value.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Days from `today` to the next occurrence of the birthday, or
    /// `None` if no birthday is set.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref().map(|b| b.days_until_next(today))
    }

    /// Days from the current local date to the next birthday occurrence.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Render the record relative to `today`, used by `Display` and by
    /// tests that need a pinned date.
    pub fn render(&self, today: NaiveDate) -> String {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        match self.days_to_birthday_from(today) {
            Some(days) => format!("{}; phones: {}; days to birth: {}", self.name, phones, days),
            None => format!("{}; phones: {}", self.name, phones),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(Local::now().date_naive()))
    }
}

/// Raw shape of a persisted record, before invariant checks.
#[derive(Deserialize)]
struct RecordData {
    name: Name,
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

// Hand-written so a persisted record with duplicate phones is rejected,
// not silently deduplicated. Field types already re-validate themselves.
impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = RecordData::deserialize(deserializer)?;

        for (i, phone) in data.phones.iter().enumerate() {
            if data.phones[..i].contains(phone) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate phone number: {}",
                    phone
                )));
            }
        }

        Ok(Record {
            name: data.name,
            phones: data.phones,
            birthday: data.birthday,
        })
    }
}
