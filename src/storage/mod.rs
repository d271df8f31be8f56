pub mod file;
pub mod stub;

pub use file::JsonStorage;
pub use stub::StorageStub;

use crate::domain::AddressBook;
use crate::errors::StorageError;
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;

pub const STORAGE_FILE_EXTENSION: &str = "json";
pub const DEFAULT_STORAGE_PATH: &str = "addressbook.json";

/// Durable home of the address book.
///
/// Implementations only borrow the book for the duration of a call and
/// never keep it around.
pub trait Storage {
    /// Replaces everything stored with `book`. On failure the previously
    /// stored book is left intact.
    fn save(&self, book: &AddressBook) -> Result<(), StorageError>;

    /// Reads the stored book. Nothing stored yet is an empty book, not an error.
    fn load(&self) -> Result<AddressBook, StorageError>;

    fn path(&self) -> &str;
}

/// Opens the storage for `path`; `ephemeral` skips the disk entirely.
pub fn open_storage(path: &str, ephemeral: bool) -> Result<Box<dyn Storage>, StorageError> {
    if ephemeral {
        return Ok(Box::new(StorageStub::new(path)));
    }
    Ok(Box::new(JsonStorage::new(path)?))
}

pub fn is_valid_path(path: &str) -> bool {
    validate_storage_path(path).is_ok()
}

/// Checks that `path` can serve as a storage file.
///
/// Writability is tested by creating and dropping a scratch file in the
/// closest existing ancestor, so nothing is left behind.
pub fn validate_storage_path(path: &str) -> Result<(), StorageError> {
    if path.trim().is_empty() {
        return Err(StorageError::invalid_path(path, "path must not be empty"));
    }

    let file_path = Path::new(path);
    if file_path
        .extension()
        .is_none_or(|ext| ext != STORAGE_FILE_EXTENSION)
    {
        return Err(StorageError::invalid_path(
            path,
            format!("storage file must end in .{STORAGE_FILE_EXTENSION}"),
        ));
    }

    if file_path.is_dir() {
        return Err(StorageError::invalid_path(path, "path names a directory"));
    }

    // Walk up to the closest ancestor that exists; it decides writability.
    let mut ancestor = parent_dir(file_path);
    while !ancestor.exists() {
        match ancestor.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => ancestor = parent,
            _ => ancestor = Path::new("."),
        }
    }

    if !ancestor.is_dir() {
        return Err(StorageError::invalid_path(
            path,
            format!("{} is not a directory", ancestor.display()),
        ));
    }

    if let Err(e) = NamedTempFile::new_in(ancestor) {
        return Err(StorageError::invalid_path(
            path,
            format!("{} is not writable: {e}", ancestor.display()),
        ));
    }

    Ok(())
}

pub fn create_file_parent(path: &str) -> std::io::Result<()> {
    let parent = parent_dir(Path::new(path));

    if !parent.exists() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
