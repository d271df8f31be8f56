use std::collections::BTreeSet;

use super::command::{
    ADD_USAGE, Command, DELETE_USAGE, FIND_USAGE, VIEW_USAGE, VIEWALL_USAGE,
};
use crate::domain::{Contact, ContactDetail};
use crate::errors::AppError;
use crate::messages::invalid_command_format;
use regex::Regex;

/// Turns raw user text into a [`Command`].
///
/// Malformed input becomes [`Command::Incorrect`] carrying the feedback to
/// show, so only internal faults surface as errors.
pub fn parse_command(input: &str) -> Result<Command, AppError> {
    let re = Regex::new(r"^(?P<word>\S+)(?P<args>.*)$")?;
    let Some(caps) = re.captures(input.trim()) else {
        return Ok(incorrect(&help_hint()));
    };

    let args = caps["args"].trim();
    let command = match &caps["word"] {
        "add" => parse_add(args)?,
        "delete" => parse_index(args, DELETE_USAGE, Command::Delete),
        "clear" => Command::Clear,
        "list" => Command::List,
        "find" => parse_find(args),
        "view" => parse_index(args, VIEW_USAGE, Command::View),
        "viewall" => parse_index(args, VIEWALL_USAGE, Command::ViewAll),
        "help" => Command::Help,
        "exit" => Command::Exit,
        _ => Command::Help,
    };
    Ok(command)
}

fn parse_add(args: &str) -> Result<Command, AppError> {
    let re = Regex::new(
        r"^(?P<name>[^/]+) (?P<phone_private>p?)p/(?P<phone>[^/]+) (?P<email_private>p?)e/(?P<email>[^/]+) (?P<address_private>p?)a/(?P<address>[^/]+?)(?P<tags>(?: t/[^/]+)*)$",
    )?;

    let Some(caps) = re.captures(args) else {
        return Ok(incorrect(ADD_USAGE));
    };

    let tags: BTreeSet<String> = caps["tags"]
        .split(" t/")
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();

    let contact = Contact::new(
        &caps["name"],
        ContactDetail::new(&caps["phone"], !caps["phone_private"].is_empty()),
        ContactDetail::new(&caps["email"], !caps["email_private"].is_empty()),
        ContactDetail::new(&caps["address"], !caps["address_private"].is_empty()),
        tags,
    );

    match contact.validate() {
        Ok(()) => Ok(Command::Add(contact)),
        Err(AppError::IllegalValue(requirement)) => Ok(Command::Incorrect(requirement)),
        Err(e) => Err(e),
    }
}

fn parse_index(args: &str, usage: &str, command: fn(usize) -> Command) -> Command {
    match args.parse::<usize>() {
        Ok(index) => command(index),
        Err(_) => incorrect(usage),
    }
}

fn parse_find(args: &str) -> Command {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return incorrect(FIND_USAGE);
    }
    Command::Find(keywords)
}

fn incorrect(usage: &str) -> Command {
    Command::Incorrect(invalid_command_format(usage))
}

fn help_hint() -> String {
    "Type 'help' to see the available commands".to_string()
}
