use std::collections::BTreeSet;

use crate::errors::AppError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single piece of contact information that the owner may mark private.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetail {
    pub value: String,

    #[serde(default)]
    pub private: bool,
}

impl ContactDetail {
    pub fn new(value: &str, private: bool) -> Self {
        Self {
            value: value.trim().to_string(),
            private,
        }
    }

    pub fn public(value: &str) -> Self {
        Self::new(value, false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: ContactDetail,
    pub email: ContactDetail,
    pub address: ContactDetail,

    #[serde(default)]
    pub tags: BTreeSet<String>,
}

pub struct ValidationReq;

impl ValidationReq {
    pub fn name_req() -> String {
        "Name must begin with an alphabet, may contain alphabets, digits, spaces, dot, hyphen \
        and apostrophe, and must not exceed 50 characters"
            .to_string()
    }

    pub fn phone_req() -> String {
        "Phone number must contain 3 to 15 digits and may begin with +".to_string()
    }

    pub fn email_req() -> String {
        "Email must look like local@domain.tld and must not exceed 254 characters".to_string()
    }

    pub fn address_req() -> String {
        "Address must not be blank".to_string()
    }

    pub fn tag_req() -> String {
        "Tags must be alphanumeric".to_string()
    }
}

impl Contact {
    pub fn new(
        name: &str,
        phone: ContactDetail,
        email: ContactDetail,
        address: ContactDetail,
        tags: BTreeSet<String>,
    ) -> Self {
        Contact {
            name: name.trim().to_string(),
            phone,
            email,
            address,
            tags,
        }
    }

    pub fn validate_name(&self) -> Result<bool, AppError> {
        let re = Regex::new(r"^[A-Za-z][A-Za-z0-9\s.'-]*$")?;
        Ok(self.name.chars().count() <= 50 && re.is_match(&self.name))
    }

    pub fn validate_number(&self) -> Result<bool, AppError> {
        let re = Regex::new(r"^\+?\d{3,15}$")?;
        Ok(re.is_match(&self.phone.value))
    }

    pub fn validate_email(&self) -> Result<bool, AppError> {
        let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")?;
        Ok(self.email.value.len() <= 254 && re.is_match(&self.email.value))
    }

    pub fn validate_address(&self) -> bool {
        !self.address.value.trim().is_empty()
    }

    pub fn validate_tags(&self) -> Result<bool, AppError> {
        let re = Regex::new(r"^[A-Za-z0-9]+$")?;
        Ok(self.tags.iter().all(|tag| re.is_match(tag)))
    }

    /// Checks every field, reporting the first one that is out of shape.
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.validate_name()? {
            return Err(AppError::IllegalValue(ValidationReq::name_req()));
        }
        if !self.validate_number()? {
            return Err(AppError::IllegalValue(ValidationReq::phone_req()));
        }
        if !self.validate_email()? {
            return Err(AppError::IllegalValue(ValidationReq::email_req()));
        }
        if !self.validate_address() {
            return Err(AppError::IllegalValue(ValidationReq::address_req()));
        }
        if !self.validate_tags()? {
            return Err(AppError::IllegalValue(ValidationReq::tag_req()));
        }
        Ok(())
    }

    /// Identity used for duplicate detection, looser than `==`.
    pub fn is_same_contact(&self, other: &Contact) -> bool {
        self.name == other.name && phone_number_matches(&self.phone.value, &other.phone.value)
    }

    pub fn as_text_show_all(&self) -> String {
        let mut text = self.name.clone();
        for (label, detail) in self.details() {
            let marker = if detail.private { "(private) " } else { "" };
            text.push_str(&format!(" {label}: {marker}{}", detail.value));
        }
        text.push_str(&self.tags_text());
        text
    }

    pub fn as_text_hide_private(&self) -> String {
        let mut text = self.name.clone();
        for (label, detail) in self.details() {
            if !detail.private {
                text.push_str(&format!(" {label}: {}", detail.value));
            }
        }
        text.push_str(&self.tags_text());
        text
    }

    fn details(&self) -> [(&'static str, &ContactDetail); 3] {
        [
            ("Phone", &self.phone),
            ("Email", &self.email),
            ("Address", &self.address),
        ]
    }

    fn tags_text(&self) -> String {
        let tags: String = self.tags.iter().map(|tag| format!("[{tag}]")).collect();
        format!(" Tags: {tags}")
    }
}

/// Compares two phone numbers, treating a `+CCC` country code and a
/// leading trunk `0` as interchangeable prefixes.
pub fn phone_number_matches(phone1: &str, phone2: &str) -> bool {
    let phone1: Vec<char> = phone1.chars().collect();
    let phone2: Vec<char> = phone2.chars().collect();

    if phone1.is_empty() || phone2.is_empty() {
        return false;
    }

    // Quick exit if the entire number matches
    if phone1 == phone2 {
        return true;
    }

    match (local_part(&phone1), local_part(&phone2)) {
        (Some(rest1), Some(rest2)) => !rest1.is_empty() && rest1 == rest2,
        _ => false,
    }
}

fn local_part(phone: &[char]) -> Option<&[char]> {
    match phone {
        ['+', _code1, _code2, _code3, rest @ ..] => Some(rest),
        ['0', rest @ ..] => Some(rest),
        _ => None,
    }
}
