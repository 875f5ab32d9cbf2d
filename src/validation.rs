use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 20;

/// A single broken input rule. Validators return every violation they find
/// instead of stopping at the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Field missing or blank.
    Required(&'static str),
    InvalidEmail,
    PasswordLength { min: usize, max: usize },
}

impl Violation {
    /// Wire name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Violation::Required(field) => *field,
            Violation::InvalidEmail => "emailAddress",
            Violation::PasswordLength { .. } => "password",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required("firstName") => f.write_str("Please provide a first name"),
            Violation::Required("lastName") => f.write_str("Please provide a last name"),
            Violation::Required("emailAddress") => {
                f.write_str("Please provide a valid email address")
            }
            Violation::Required("password") => f.write_str("Please provide a password"),
            Violation::Required(field) => write!(f, "Please provide a value for \"{field}\""),
            Violation::InvalidEmail => f.write_str("Email address is not valid"),
            Violation::PasswordLength { min, max } => {
                write!(f, "Password must be between {min} and {max} characters")
            }
        }
    }
}

/// JSON shape of a violation in a 400 response.
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl From<&Violation> for FieldError {
    fn from(v: &Violation) -> Self {
        Self {
            field: v.field(),
            message: v.to_string(),
        }
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Pushes `Required(field)` when `value` is absent or blank.
pub(crate) fn require(out: &mut Vec<Violation>, field: &'static str, value: Option<&str>) {
    if value.map_or(true, is_blank) {
        out.push(Violation::Required(field));
    }
}
