//! The address book collection.
//!
//! An insertion-ordered set of records keyed by contact name. Lookups
//! and search are linear scans; the book is small and lives entirely in
//! memory, loaded once at startup and flushed once at shutdown.

use crate::error::CommandError;
use crate::models::Record;
use serde::{Deserialize, Deserializer, Serialize};

/// Insertion-ordered collection of contact records with unique names.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a record.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::ContactExists` if a record with the same
    /// name is already present; the existing record is left untouched.
    pub fn add_record(&mut self, record: Record) -> Result<(), CommandError> {
        if self.find(record.name().as_str()).is_some() {
            return Err(CommandError::ContactExists(record.name().to_string()));
        }
        self.records.push(record);
        Ok(())
    }

    /// Remove the record under `name`. Removing an absent name is a
    /// silent no-op.
    pub fn delete(&mut self, name: &str) {
        self.records.retain(|r| *r.name() != *name);
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| *r.name() == *name)
    }

    /// Exact-name lookup with mutable access.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| *r.name() == *name)
    }

    /// Case-insensitive substring search against the contact name or
    /// the concatenated phone digits, in insertion order.
    pub fn search_full(&self, query: &str) -> Vec<&Record> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.name().as_str().to_lowercase().contains(&query)
                    || r.phones()
                        .iter()
                        .map(|p| p.as_str())
                        .collect::<String>()
                        .contains(&query)
            })
            .collect()
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Lazy iterator over pages of up to `page_size` records, in
    /// insertion order; the last page may be shorter. Each call starts
    /// a fresh traversal. A zero page size yields no pages.
    pub fn pages(&self, page_size: usize) -> Pages<'_> {
        Pages {
            records: &self.records,
            page_size,
        }
    }
}

/// Iterator over fixed-size pages of an address book.
pub struct Pages<'a> {
    records: &'a [Record],
    page_size: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.page_size == 0 || self.records.is_empty() {
            return None;
        }
        let split = self.page_size.min(self.records.len());
        let (page, rest) = self.records.split_at(split);
        self.records = rest;
        Some(page.iter().collect())
    }
}

// Hand-written so a persisted book with duplicate names is rejected as
// a whole rather than keeping the first occurrence.
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;

        let mut book = AddressBook::new();
        for record in records {
            let name = record.name().to_string();
            book.add_record(record)
                .map_err(|_| serde::de::Error::custom(format!("duplicate contact name: {}", name)))?;
        }
        Ok(book)
    }
}
