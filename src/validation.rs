//! Field rules for the contact form.
//!
//! The rules live in one table so live (per-field) and submit-time
//! (whole-record) validation can never drift apart.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::models::{ContactSubmission, ProjectType};

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?(\d{2})\)?[-.\s]?(\d{4,5})[-.\s]?(\d{4})$").expect("phone pattern is valid")
});

pub const NAME_MIN: usize = 3;
pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 255;
pub const MESSAGE_MIN: usize = 20;
pub const MESSAGE_MAX: usize = 1000;

/// Form fields, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    ProjectType,
    OtherProjectType,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::ProjectType => "projectType",
            Field::OtherProjectType => "otherProjectType",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Rule = fn(&ContactSubmission) -> Result<(), &'static str>;

/// Cross-field rules come last.
const SCHEMA: [(Field, Rule); 6] = [
    (Field::Name, check_name),
    (Field::Email, check_email),
    (Field::Phone, check_phone),
    (Field::ProjectType, check_project_type),
    (Field::Message, check_message),
    (Field::OtherProjectType, check_other_project_type),
];

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn check_name(record: &ContactSubmission) -> Result<(), &'static str> {
    match char_len(&record.name) {
        n if n < NAME_MIN => Err("Name must be at least 3 characters"),
        n if n > NAME_MAX => Err("Name must be at most 100 characters"),
        _ => Ok(()),
    }
}

fn check_email(record: &ContactSubmission) -> Result<(), &'static str> {
    let email = record.email.as_str();
    let shaped = EMAIL.is_match(email) && !email.starts_with('.') && !email.contains("..");
    if shaped && char_len(email) <= EMAIL_MAX {
        Ok(())
    } else {
        Err("Invalid email address")
    }
}

fn check_phone(record: &ContactSubmission) -> Result<(), &'static str> {
    if PHONE.is_match(&record.phone) {
        Ok(())
    } else {
        Err("Invalid phone. Expected format (00) 00000-0000")
    }
}

fn check_project_type(record: &ContactSubmission) -> Result<(), &'static str> {
    record
        .project_type()
        .map(|_| ())
        .ok_or("Select a project type")
}

fn check_message(record: &ContactSubmission) -> Result<(), &'static str> {
    match char_len(&record.message) {
        n if n < MESSAGE_MIN => Err("Message must be at least 20 characters"),
        n if n > MESSAGE_MAX => Err("Message must be at most 1000 characters"),
        _ => Ok(()),
    }
}

fn check_other_project_type(record: &ContactSubmission) -> Result<(), &'static str> {
    if record.project_type() == Some(ProjectType::Other)
        && record.other_project_type.trim().is_empty()
    {
        Err("Please specify the project type")
    } else {
        Ok(())
    }
}

/// Error for a single field, if any. Used for live feedback while typing.
pub fn validate_field(record: &ContactSubmission, field: Field) -> Option<&'static str> {
    SCHEMA
        .iter()
        .filter(|(f, _)| *f == field)
        .find_map(|(_, rule)| rule(record).err())
}

/// Run every rule against the record.
pub fn validate(record: &ContactSubmission) -> Result<(), FieldErrors> {
    let errors: Vec<_> = SCHEMA
        .iter()
        .filter_map(|(field, rule)| rule(record).err().map(|msg| (*field, msg)))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FieldErrors(errors))
    }
}

/// Field-level failures, in rule order
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation: {}", .0.len(), field_list(.0))]
pub struct FieldErrors(Vec<(Field, &'static str)>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, msg)| *msg)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn field_list(errors: &[(Field, &'static str)]) -> String {
    errors
        .iter()
        .map(|(f, _)| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
