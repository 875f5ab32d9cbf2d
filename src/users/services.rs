use tracing::{info, warn};

use super::{
    dto::NewUserRequest,
    repo::UserRepo,
    repo_types::NewUser,
    validation::validate_new_user,
};
use crate::{auth::password::hash_password, error::AppError};

/// Validates and stores a new user, returning its id. The plaintext password
/// is hashed before it reaches the repository and is dropped afterwards.
pub async fn register(repo: &dyn UserRepo, req: NewUserRequest) -> Result<i64, AppError> {
    let violations = validate_new_user(&req);
    if !violations.is_empty() {
        warn!(count = violations.len(), "signup rejected by validation");
    }
    AppError::check(violations)?;

    let NewUserRequest {
        first_name,
        last_name,
        email_address,
        password,
    } = req;

    let password_hash = hash_password(password.as_deref().unwrap_or_default())?;
    let new = NewUser {
        first_name: first_name.unwrap_or_default().trim().to_string(),
        last_name: last_name.unwrap_or_default().trim().to_string(),
        email_address: email_address.unwrap_or_default().trim().to_string(),
        password_hash,
    };

    let user = repo.insert(new).await.map_err(|e| {
        if matches!(e, AppError::UniqueConstraintViolation(_)) {
            warn!("signup with an email address already in use");
        }
        e
    })?;

    info!(user_id = user.id, "user registered");
    Ok(user.id)
}
