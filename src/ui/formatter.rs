use crate::domain::Contact;

pub const LINE_PREFIX: &str = "|| ";
pub const DIVIDER: &str = "===================================================";

/// Formats text for the output console.
pub struct Formatter;

impl Formatter {
    /// Prefixes every line of every message, one message after another.
    pub fn format_messages(messages: &[&str]) -> String {
        let mut formatted = String::new();
        for message in messages {
            for line in message.split('\n') {
                formatted.push_str(LINE_PREFIX);
                formatted.push_str(line);
                formatted.push('\n');
            }
        }
        formatted
    }

    /// An indexed listing with private details left out.
    pub fn format_contacts(contacts: &[Contact]) -> String {
        if contacts.is_empty() {
            return String::new();
        }
        let listing = contacts
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:>3}. {}", i + 1, c.as_text_hide_private()))
            .collect::<Vec<String>>()
            .join("\n");
        Self::format_messages(&[&listing])
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::domain::ContactDetail;

    #[test]
    fn prefixes_each_line() {
        assert_eq!(
            Formatter::format_messages(&["one", "two\nthree"]),
            "|| one\n|| two\n|| three\n"
        );
    }

    #[test]
    fn lists_contacts_by_position_without_private_details() {
        let contacts = vec![
            Contact::new(
                "Alice",
                ContactDetail::public("08011112222"),
                ContactDetail::new("alice@example.com", true),
                ContactDetail::public("Lagos"),
                BTreeSet::new(),
            ),
            Contact::new(
                "Bob",
                ContactDetail::new("08033334444", true),
                ContactDetail::public("bob@example.com"),
                ContactDetail::public("Abuja"),
                BTreeSet::from(["work".to_string()]),
            ),
        ];

        assert_eq!(
            Formatter::format_contacts(&contacts),
            "||   1. Alice Phone: 08011112222 Address: Lagos Tags: \n\
            ||   2. Bob Email: bob@example.com Address: Abuja Tags: [work]\n"
        );
    }
}
