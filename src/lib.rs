//! Address Book - a console-driven contact manager with validated
//! fields and binary persistence.
//!
//! The library holds everything except the process entry point: the
//! validated field types, the record and book collections, storage, and
//! the command interpreter driven by the REPL.
//!
//! # Architecture
//!
//! - **domain**: validated field value objects (Name, Phone, Birthday)
//! - **models**: the Record contact type built from domain fields
//! - **book**: the insertion-ordered AddressBook collection
//! - **storage**: bincode persistence of the whole book
//! - **commands**: command parsing and handlers
//! - **repl**: the blocking read-eval-print loop
//! - **config**: configuration from environment variables
//! - **error**: custom error types for precise error handling

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use book::AddressBook;
pub use commands::Command;
pub use config::Config;
pub use error::{CommandError, ConfigError, RecordError, StorageError};
pub use models::Record;
pub use storage::FileStorage;
