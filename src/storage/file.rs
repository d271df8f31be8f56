use super::*;

use crate::domain::Contact;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use tempfile::NamedTempFile;
use tracing::debug;

/// On-disk layout of the address book.
#[derive(Serialize)]
struct StoredAddressBookRef<'a> {
    contacts: &'a [Contact],
}

#[derive(Deserialize)]
struct StoredAddressBook {
    #[serde(default)]
    contacts: Vec<Contact>,
}

/// Keeps the address book in a single pretty-printed JSON file.
#[derive(Debug)]
pub struct JsonStorage {
    path: String,
}

impl JsonStorage {
    /// Validates `path` once and prepares its parent directory.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        validate_storage_path(path)?;
        create_file_parent(path).map_err(|e| {
            StorageError::invalid_path(path, format!("cannot create parent directory: {e}"))
        })?;

        debug!(path, "storage file accepted");
        Ok(Self {
            path: path.to_string(),
        })
    }

    fn operation_error(&self, action: &str, err: impl std::fmt::Display) -> StorageError {
        StorageError::operation(format!("could not {action} {}: {err}", self.path))
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Result<AddressBook, StorageError> {
        let exists = fs::exists(Path::new(&self.path))
            .map_err(|e| self.operation_error("access", e))?;
        if !exists {
            debug!(path = %self.path, "no storage file yet, starting empty");
            return Ok(AddressBook::new());
        }

        let mut file = OpenOptions::new()
            .read(true)
            .open(&self.path)
            .map_err(|e| self.operation_error("open", e))?;

        let mut data = String::new();
        file.read_to_string(&mut data)
            .map_err(|e| self.operation_error("read", e))?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(AddressBook::new());
        }

        let stored: StoredAddressBook =
            serde_json::from_str(&data).map_err(|e| self.operation_error("parse", e))?;
        let book = AddressBook::from_contacts(stored.contacts)
            .map_err(|e| self.operation_error("accept the contacts in", e))?;

        debug!(path = %self.path, contacts = book.len(), "address book loaded");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> Result<(), StorageError> {
        let stored = StoredAddressBookRef {
            contacts: book.contacts(),
        };
        let data =
            serde_json::to_vec_pretty(&stored).map_err(|e| self.operation_error("encode", e))?;

        write_atomically(Path::new(&self.path), |file| file.write_all(&data))
            .map_err(|e| self.operation_error("write", e))?;

        debug!(path = %self.path, contacts = book.len(), "address book saved");
        Ok(())
    }

    fn path(&self) -> &str {
        &self.path
    }
}

/// Writes through a temporary sibling of `target` and renames it into place,
/// so readers see either the old file or the complete new one.
fn write_atomically<F>(target: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let dir = parent_dir(target);
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    // Dropping the temp file on any early return deletes it.
    let mut tmp = NamedTempFile::new_in(dir)?;
    write(tmp.as_file_mut())?;
    tmp.as_file_mut().flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::error::Error;

    use super::*;
    use crate::domain::ContactDetail;
    use tempfile::tempdir;

    fn sample_book() -> AddressBook {
        let contacts = vec![
            Contact::new(
                "Uche",
                ContactDetail::public("01234567890"),
                ContactDetail::new("ucheuche@gmail.com", true),
                ContactDetail::public("4 Awolowo Road"),
                BTreeSet::from(["family".to_string()]),
            ),
            Contact::new(
                "Alex",
                ContactDetail::new("+447314843720", true),
                ContactDetail::public("alex@example.com"),
                ContactDetail::new("221B Baker Street", true),
                BTreeSet::new(),
            ),
        ];
        AddressBook::from_contacts(contacts).unwrap()
    }

    fn storage_in(dir: &Path) -> Result<JsonStorage, StorageError> {
        JsonStorage::new(&dir.join("data/addressbook.json").to_string_lossy())
    }

    #[test]
    fn path_is_kept_verbatim() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("data/addressbook.json");
        let path = path.to_string_lossy().to_string();

        let storage = JsonStorage::new(&path)?;

        assert_eq!(storage.path(), path);
        assert!(dir.path().join("data").is_dir());
        Ok(())
    }

    #[test]
    fn invalid_path_fails_construction() {
        let err = JsonStorage::new("addressbook.txt").unwrap_err();
        assert!(err.is_illegal_value());

        let err = JsonStorage::new("").unwrap_err();
        assert!(err.is_illegal_value());
    }

    #[test]
    fn first_run_loads_empty_book() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let storage = storage_in(dir.path())?;

        assert!(storage.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn save_then_load_round_trips() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let storage = storage_in(dir.path())?;
        let book = sample_book();

        storage.save(&book)?;
        assert_eq!(storage.load()?, book);

        // A full overwrite, not an append
        storage.save(&AddressBook::new())?;
        assert!(storage.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn every_savable_book_loads_back() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let storage = storage_in(dir.path())?;
        let mut book = sample_book();

        let rejected = Contact::new(
            "Bola",
            ContactDetail::public("12"),
            ContactDetail::public("x"),
            ContactDetail::public("Ikeja"),
            BTreeSet::new(),
        );
        assert!(book.add_contact(rejected).is_err());

        storage.save(&book)?;
        assert_eq!(storage.load()?, book);
        Ok(())
    }

    #[test]
    fn blank_file_is_an_empty_book() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let storage = storage_in(dir.path())?;
        fs::write(storage.path(), "  \n")?;

        assert!(storage.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn corrupt_file_is_an_operation_error() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let storage = storage_in(dir.path())?;

        fs::write(storage.path(), "{\"contacts\": [")?;
        let err = storage.load().unwrap_err();
        assert!(err.is_operation());
        assert!(format!("{err}").contains("could not parse"));

        let malformed = r#"{"contacts": [{
            "name": "Uche",
            "phone": {"value": "not-a-number"},
            "email": {"value": "uche@example.com"},
            "address": {"value": "Lagos"}
        }]}"#;
        fs::write(storage.path(), malformed)?;
        let err = storage.load().unwrap_err();
        assert!(err.is_operation());
        Ok(())
    }

    #[test]
    fn failed_write_keeps_previous_file() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let storage = storage_in(dir.path())?;
        let book = sample_book();
        storage.save(&book)?;

        let result = write_atomically(Path::new(storage.path()), |file| {
            file.write_all(b"{\"contacts\": [")?;
            Err(io::Error::other("disk unplugged mid-write"))
        });

        assert!(result.is_err());
        assert_eq!(storage.load()?, book);
        // Only the real storage file remains, no stray temp files
        assert_eq!(fs::read_dir(dir.path().join("data"))?.count(), 1);
        Ok(())
    }

    #[test]
    fn save_recreates_missing_parent() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let storage = storage_in(dir.path())?;
        fs::remove_dir(dir.path().join("data"))?;

        storage.save(&sample_book())?;
        assert_eq!(storage.load()?.len(), 2);
        Ok(())
    }
}
