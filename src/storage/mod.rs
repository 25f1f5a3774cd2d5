//! Binary persistence for the address book.
//!
//! The whole book is serialized with `bincode` into a single artifact,
//! by default colocated with the executable. Loading re-runs every
//! field validation through the serde layer; any structurally invalid
//! record discards the entire file and the book starts empty. There is
//! no partial recovery.

use crate::book::AddressBook;
use crate::error::{StorageError, StorageResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default artifact name, resolved against the executable's directory.
pub const DEFAULT_FILE_NAME: &str = "address_book.bin";

/// File-backed storage for a single address book.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the default location next to the running executable.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::ProgramDir` if the executable path cannot
    /// be determined.
    pub fn at_default_location() -> StorageResult<Self> {
        let exe = std::env::current_exe().map_err(StorageError::ProgramDir)?;
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::new(dir.join(DEFAULT_FILE_NAME)))
    }

    /// Where the artifact lives.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the whole book to the artifact, replacing any previous
    /// content.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the target is not writable (the
    /// underlying reason, e.g. permission denial, is preserved) and
    /// `StorageError::Encode` if serialization fails.
    pub fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let bytes = bincode::serialize(book).map_err(StorageError::Encode)?;

        std::fs::write(&self.path, bytes).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!(path = %self.path.display(), records = book.len(), "address book saved");
        Ok(())
    }

    /// Load the book from the artifact.
    ///
    /// An absent file yields an empty book. A file that fails to decode
    /// as a structurally valid book (bad framing, invalid field values,
    /// duplicate phones or names) is discarded as a whole and also
    /// yields an empty book.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` only when the file exists but cannot
    /// be read, e.g. the directory is not readable.
    pub fn load(&self) -> StorageResult<AddressBook> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no stored address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match bincode::deserialize::<AddressBook>(&bytes) {
            Ok(book) => {
                info!(path = %self.path.display(), records = book.len(), "address book loaded");
                Ok(book)
            }
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    %error,
                    "stored address book is corrupt, starting empty"
                );
                Ok(AddressBook::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        let mut rec = Record::new_with_birthday("John", "19.10.2004").unwrap();
        rec.add_phone("1234567890").unwrap();
        book.add_record(rec).unwrap();
        book
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join(DEFAULT_FILE_NAME));

        let book = sample_book();
        storage.save(&book).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded, book);
    }

    #[test]
    fn test_load_absent_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("missing.bin"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        std::fs::write(&path, b"not a bincode payload").unwrap();

        let storage = FileStorage::new(path);
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_to_unwritable_target_fails() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the target path makes the write fail reliably
        // on every platform, standing in for a permission denial.
        let path = dir.path().join("blocked");
        std::fs::create_dir(&path).unwrap();

        let storage = FileStorage::new(&path);
        let err = storage.save(&sample_book()).unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
        assert!(err.to_string().contains("No access rights!"));
    }
}
