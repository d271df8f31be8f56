use crate::domain::Contact;
use crate::messages::MESSAGE_EXIT_ACK;

/// Outcome of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback_to_user: String,
    relevant_contacts: Option<Vec<Contact>>,
}

impl CommandResult {
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            relevant_contacts: None,
        }
    }

    /// A result carrying a listing, as produced by list and find style commands.
    pub fn with_contacts(feedback_to_user: impl Into<String>, contacts: Vec<Contact>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            relevant_contacts: Some(contacts),
        }
    }

    pub fn feedback_to_user(&self) -> &str {
        &self.feedback_to_user
    }

    pub fn relevant_contacts(&self) -> Option<&[Contact]> {
        self.relevant_contacts.as_deref()
    }

    pub fn into_parts(self) -> (String, Option<Vec<Contact>>) {
        (self.feedback_to_user, self.relevant_contacts)
    }

    /// True only for the exact exit acknowledgement.
    pub fn is_exit(&self) -> bool {
        self.feedback_to_user == MESSAGE_EXIT_ACK
    }
}
