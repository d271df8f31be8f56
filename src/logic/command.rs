use crate::domain::{AddressBook, CommandResult, Contact};
use crate::errors::AppError;
use crate::messages::{
    self, MESSAGE_ADDRESSBOOK_CLEARED, MESSAGE_CONTACT_NOT_IN_ADDRESSBOOK,
    MESSAGE_DUPLICATE_CONTACT, MESSAGE_EXIT_ACK, MESSAGE_INVALID_CONTACT_DISPLAYED_INDEX,
};

pub const ADD_USAGE: &str = "add: Adds a contact to the address book. \
    Contact details can be marked private by prepending 'p' to the prefix.\n\
    \tParameters: NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS [t/TAG]...\n\
    \tExample: add John Doe p/98765432 e/johnd@gmail.com a/311 Clementi Ave 2 t/friends";
pub const DELETE_USAGE: &str = "delete: Deletes the contact identified by the index number \
    used in the last contact listing.\n\
    \tParameters: INDEX\n\
    \tExample: delete 1";
pub const CLEAR_USAGE: &str = "clear: Clears the address book permanently.\n\
    \tExample: clear";
pub const LIST_USAGE: &str = "list: Displays all contacts in the address book \
    as a list with index numbers.\n\
    \tExample: list";
pub const FIND_USAGE: &str = "find: Finds all contacts whose names contain any of \
    the specified keywords (case-sensitive) and displays them as a list with index numbers.\n\
    \tParameters: KEYWORD [MORE_KEYWORDS]...\n\
    \tExample: find alice bob charlie";
pub const VIEW_USAGE: &str = "view: Shows the non-private details of the contact \
    identified by the index number in the last contact listing.\n\
    \tParameters: INDEX\n\
    \tExample: view 1";
pub const VIEWALL_USAGE: &str = "viewall: Shows all details of the contact \
    identified by the index number in the last contact listing.\n\
    \tParameters: INDEX\n\
    \tExample: viewall 1";
pub const HELP_USAGE: &str = "help: Shows program usage instructions.\n\
    \tExample: help";
pub const EXIT_USAGE: &str = "exit: Exits the program.\n\
    \tExample: exit";

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Contact),
    /// One-based index into the last shown listing.
    Delete(usize),
    Clear,
    List,
    Find(Vec<String>),
    View(usize),
    ViewAll(usize),
    Help,
    Exit,
    /// Input that could not be understood; carries the feedback to show.
    Incorrect(String),
}

impl Command {
    /// Commands whose execution may change the address book.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Command::Add(_) | Command::Delete(_) | Command::Clear)
    }

    pub fn execute(self, book: &mut AddressBook, last_shown: &[Contact]) -> CommandResult {
        match self {
            Command::Add(contact) => {
                let text = contact.as_text_show_all();
                match book.add_contact(contact) {
                    Ok(()) => CommandResult::new(format!("New contact added: {text}")),
                    Err(AppError::DuplicateContact(_)) => {
                        CommandResult::new(MESSAGE_DUPLICATE_CONTACT)
                    }
                    Err(e) => CommandResult::new(e.to_string()),
                }
            }

            Command::Delete(index) => match target_contact(index, last_shown) {
                Some(target) => match book.remove_contact(target) {
                    Ok(removed) => CommandResult::new(format!(
                        "Deleted Contact: {}",
                        removed.as_text_show_all()
                    )),
                    Err(_) => CommandResult::new(MESSAGE_CONTACT_NOT_IN_ADDRESSBOOK),
                },
                None => CommandResult::new(MESSAGE_INVALID_CONTACT_DISPLAYED_INDEX),
            },

            Command::Clear => {
                book.clear();
                CommandResult::new(MESSAGE_ADDRESSBOOK_CLEARED)
            }

            Command::List => {
                let contacts = book.contacts().to_vec();
                CommandResult::with_contacts(messages::contacts_listed(contacts.len()), contacts)
            }

            Command::Find(keywords) => {
                let keywords: Vec<&str> = keywords.iter().map(String::as_str).collect();
                let found = book.find_by_name_keywords(&keywords);
                CommandResult::with_contacts(messages::contacts_listed(found.len()), found)
            }

            Command::View(index) => view_contact(index, book, last_shown, false),
            Command::ViewAll(index) => view_contact(index, book, last_shown, true),

            Command::Help => CommandResult::new(
                [
                    ADD_USAGE,
                    DELETE_USAGE,
                    CLEAR_USAGE,
                    FIND_USAGE,
                    LIST_USAGE,
                    VIEW_USAGE,
                    VIEWALL_USAGE,
                    HELP_USAGE,
                    EXIT_USAGE,
                ]
                .join("\n"),
            ),

            Command::Exit => CommandResult::new(MESSAGE_EXIT_ACK),

            Command::Incorrect(feedback) => CommandResult::new(feedback),
        }
    }
}

fn target_contact(index: usize, last_shown: &[Contact]) -> Option<&Contact> {
    index.checked_sub(1).and_then(|i| last_shown.get(i))
}

fn view_contact(
    index: usize,
    book: &AddressBook,
    last_shown: &[Contact],
    show_all: bool,
) -> CommandResult {
    let Some(target) = target_contact(index, last_shown) else {
        return CommandResult::new(MESSAGE_INVALID_CONTACT_DISPLAYED_INDEX);
    };

    if !book.contacts().contains(target) {
        return CommandResult::new(MESSAGE_CONTACT_NOT_IN_ADDRESSBOOK);
    }

    let text = if show_all {
        target.as_text_show_all()
    } else {
        target.as_text_hide_private()
    };
    CommandResult::new(format!("Viewing contact: {text}"))
}
