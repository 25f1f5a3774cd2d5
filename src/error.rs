//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by operations on a single record.
#[derive(Error, Debug)]
pub enum RecordError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number is not on the record
    #[error("Phone number {0} not found")]
    PhoneNotFound(String),
}

/// Errors raised while executing a user command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record-level operation failed
    #[error(transparent)]
    Record(#[from] RecordError),

    /// No record under that name
    #[error("Contact {0} not found")]
    ContactNotFound(String),

    /// A record with that name already exists
    #[error("Contact {0} already exists")]
    ContactExists(String),

    /// Wrong command shape or argument count
    #[error("Invalid command format")]
    InvalidFormat,
}

/// Errors that can occur while loading or saving the persisted book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the artifact failed (covers permission denial)
    #[error("No access rights! Cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the book failed
    #[error("Failed to encode address book: {0}")]
    Encode(#[source] bincode::Error),

    /// The executable's directory could not be determined
    #[error("Cannot locate program directory: {0}")]
    ProgramDir(#[source] std::io::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for command handler results
pub type CommandResult = Result<String, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
