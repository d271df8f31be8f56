pub use crate::cli::{command::Cli, run_app, run_session};
pub use crate::domain::{AddressBook, CommandResult, Contact, ContactDetail};
pub use crate::errors::{AppError, StorageError};
pub use crate::logic::{Executor, Logic};
pub use crate::messages::MESSAGE_EXIT_ACK;
pub use crate::storage::{JsonStorage, Storage, StorageStub, open_storage};
pub use crate::ui::{CycleOutcome, Presenter, Stoppable};
