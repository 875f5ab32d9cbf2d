use super::dto::NewUserRequest;
use crate::validation::{
    is_valid_email, require, Violation, PASSWORD_MAX_LEN, PASSWORD_MIN_LEN,
};

/// Checks a signup request, reporting at most one violation per field.
pub fn validate_new_user(req: &NewUserRequest) -> Vec<Violation> {
    let mut out = Vec::new();
    require(&mut out, "firstName", req.first_name.as_deref());
    require(&mut out, "lastName", req.last_name.as_deref());

    match req.email_address.as_deref().map(str::trim) {
        Some(email) if !email.is_empty() => {
            if !is_valid_email(email) {
                out.push(Violation::InvalidEmail);
            }
        }
        _ => out.push(Violation::Required("emailAddress")),
    }

    match req.password.as_deref() {
        Some(pw) if !pw.is_empty() => {
            let len = pw.chars().count();
            if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
                out.push(Violation::PasswordLength {
                    min: PASSWORD_MIN_LEN,
                    max: PASSWORD_MAX_LEN,
                });
            }
        }
        _ => out.push(Violation::Required("password")),
    }

    out
}
