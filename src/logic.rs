pub mod command;
pub mod parser;

use crate::domain::{AddressBook, CommandResult, Contact};
use crate::errors::AppError;
use crate::storage::Storage;
use command::Command;
use tracing::{debug, warn};

/// Anything that can turn command text into a [`CommandResult`].
pub trait Executor {
    fn execute(&mut self, command_text: &str) -> Result<CommandResult, AppError>;
}

/// Runs commands against the address book and keeps storage in step with it.
pub struct Logic {
    storage: Box<dyn Storage>,
    book: AddressBook,
    last_shown: Vec<Contact>,
}

impl Logic {
    /// Seeds the book from `storage`.
    pub fn new(storage: Box<dyn Storage>) -> Result<Self, AppError> {
        let book = storage.load()?;
        Ok(Self::with_book(storage, book))
    }

    pub fn with_book(storage: Box<dyn Storage>, book: AddressBook) -> Self {
        Self {
            storage,
            book,
            last_shown: Vec::new(),
        }
    }

    pub fn storage_path(&self) -> &str {
        self.storage.path()
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.book
    }

    pub fn last_shown_list(&self) -> &[Contact] {
        &self.last_shown
    }

    /// Executes `command`, saving the book if it changed. A failed save
    /// puts the book back the way it was before the command.
    fn run(&mut self, command: Command) -> Result<CommandResult, AppError> {
        if !command.is_mutating() {
            return Ok(command.execute(&mut self.book, &self.last_shown));
        }

        let snapshot = self.book.clone();
        let result = command.execute(&mut self.book, &self.last_shown);

        if self.book != snapshot
            && let Err(e) = self.storage.save(&self.book)
        {
            warn!(error = %e, "save failed, rolling back command");
            self.book = snapshot;
            return Err(e.into());
        }
        Ok(result)
    }
}

impl Executor for Logic {
    fn execute(&mut self, command_text: &str) -> Result<CommandResult, AppError> {
        let command = parser::parse_command(command_text)?;
        debug!(?command, "executing");

        let result = self.run(command)?;
        if let Some(contacts) = result.relevant_contacts() {
            self.last_shown = contacts.to_vec();
        }
        Ok(result)
    }
}
