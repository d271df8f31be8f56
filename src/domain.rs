pub mod address_book;
pub mod command_result;
pub mod contact;

pub use address_book::AddressBook;
pub use command_result::CommandResult;
pub use contact::{Contact, ContactDetail};
