use super::*;

/// Storage that forgets everything: saves succeed without effect and loads
/// always come back empty.
#[derive(Debug, Clone)]
pub struct StorageStub {
    path: String,
}

impl StorageStub {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

impl Storage for StorageStub {
    fn save(&self, _book: &AddressBook) -> Result<(), StorageError> {
        Ok(())
    }

    fn load(&self) -> Result<AddressBook, StorageError> {
        Ok(AddressBook::new())
    }

    fn path(&self) -> &str {
        &self.path
    }
}
