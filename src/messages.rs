//! User facing text shared by the executor, the presenter and the bootstrap.

pub const MESSAGE_EXIT_ACK: &str = "Exiting Address Book as requested ...";
pub const MESSAGE_WELCOME: &str = "Welcome to your Address Book!";
pub const MESSAGE_PROGRAM_LAUNCH_ARGS_USAGE: &str =
    "Launch command format: rusty-addressbook [STORAGE_FILE | --storage-file STORAGE_FILE]";
pub const MESSAGE_USING_EPHEMERAL_STORAGE: &str =
    "Changes in this session will not be saved.";

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format!";
pub const MESSAGE_INVALID_CONTACT_DISPLAYED_INDEX: &str = "The contact index provided is invalid";
pub const MESSAGE_CONTACT_NOT_IN_ADDRESSBOOK: &str = "Contact could not be found in address book";
pub const MESSAGE_DUPLICATE_CONTACT: &str = "This contact already exists in the address book";
pub const MESSAGE_ADDRESSBOOK_CLEARED: &str = "Address book has been cleared!";

pub fn using_storage_file(path: &str) -> String {
    format!("Using storage file : {path}")
}

pub fn contacts_listed(count: usize) -> String {
    format!("{count} contacts listed!")
}

pub fn invalid_command_format(usage: &str) -> String {
    format!("{MESSAGE_INVALID_COMMAND_FORMAT} \n{usage}")
}
