use super::formatter::{DIVIDER, Formatter};
use crate::domain::{CommandResult, Contact};
use crate::errors::AppError;
use crate::logic::Executor;
use crate::messages::{MESSAGE_PROGRAM_LAUNCH_ARGS_USAGE, MESSAGE_WELCOME, using_storage_file};
use tracing::{debug, info};

/// The host application, as far as the presenter is concerned.
pub trait Stoppable {
    fn stop(&mut self);
}

/// How a command cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Continue,
    Exit,
}

/// Session state of the user surface: the output console, the command
/// input field and the contact table.
///
/// A result without a contact list leaves the table as it was; a result
/// with a list, even an empty one, replaces it.
#[derive(Debug, Default)]
pub struct Presenter {
    output: String,
    command_input: String,
    table: Option<Vec<Contact>>,
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn command_input(&self) -> &str {
        &self.command_input
    }

    pub fn set_command_input(&mut self, text: &str) {
        self.command_input = text.to_string();
    }

    /// Contacts currently in the table, `None` while no listing has been shown.
    pub fn table(&self) -> Option<&[Contact]> {
        self.table.as_deref()
    }

    /// Runs one command cycle for the text in the command input.
    ///
    /// An exit acknowledgement stops `host` and renders nothing. A failed
    /// execution is rendered to the output and then handed back to the caller.
    /// The error replaces the previous output rather than being appended to it.
    pub fn on_command(
        &mut self,
        executor: &mut dyn Executor,
        host: &mut dyn Stoppable,
    ) -> Result<CycleOutcome, AppError> {
        let command_text = self.command_input.clone();

        match executor.execute(&command_text) {
            Ok(result) => {
                if result.is_exit() {
                    info!("exit requested");
                    host.stop();
                    return Ok(CycleOutcome::Exit);
                }
                self.display_result(result);
                self.clear_command_input();
                Ok(CycleOutcome::Continue)
            }
            Err(e) => {
                debug!(error = %e, command = %command_text, "command failed");
                self.clear_output();
                self.display(&[&e.to_string()]);
                Err(e)
            }
        }
    }

    /// Replaces the output with `result`, listing before feedback.
    pub fn display_result(&mut self, result: CommandResult) {
        self.clear_output();

        if let Some(contacts) = result.relevant_contacts() {
            self.output.push_str(&Formatter::format_contacts(contacts));
        }
        self.display(&[result.feedback_to_user()]);

        let (_, contacts) = result.into_parts();
        if let Some(contacts) = contacts {
            self.table = Some(contacts);
        }
    }

    pub fn display_welcome_message(&mut self, version: &str, storage_path: &str) {
        let storage_info = using_storage_file(storage_path);
        self.display(&[
            DIVIDER,
            DIVIDER,
            MESSAGE_WELCOME,
            version,
            MESSAGE_PROGRAM_LAUNCH_ARGS_USAGE,
            &storage_info,
            DIVIDER,
        ]);
    }

    /// Appends `messages` to the output.
    pub fn display(&mut self, messages: &[&str]) {
        self.output.push_str(&Formatter::format_messages(messages));
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    fn clear_command_input(&mut self) {
        self.command_input.clear();
    }
}
