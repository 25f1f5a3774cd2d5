//! Data models for address book entities.
//!
//! This module contains the data structures representing contact
//! records built from the validated domain field types.

pub mod record;

pub use record::Record;
