use serde::Serialize;
use tracing::{debug, warn};

use super::{
    credentials::Credentials,
    password::{verify_against_dummy, verify_password},
};
use crate::{error::AppError, users::repo::UserRepo, users::repo_types::User};

/// Authenticated caller attached to a request. Never carries the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: i64,
    pub email_address: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for Identity {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email_address: u.email_address,
            first_name: u.first_name,
            last_name: u.last_name,
        }
    }
}

/// Resolves `creds` to a user and checks the password. All three failure
/// modes collapse into `AppError::Unauthenticated`; only the log line differs.
pub async fn authenticate(
    repo: &dyn UserRepo,
    creds: Option<Credentials>,
) -> Result<Identity, AppError> {
    let Some(creds) = creds else {
        warn!("auth header not found");
        return Err(AppError::Unauthenticated);
    };

    let Some(user) = repo.find_by_email(&creds.name).await? else {
        verify_against_dummy(&creds.pass);
        warn!(login = %creds.name, "user not found");
        return Err(AppError::Unauthenticated);
    };

    if !verify_password(&creds.pass, &user.password_hash)? {
        warn!(user_id = user.id, "authentication failure");
        return Err(AppError::Unauthenticated);
    }

    debug!(user_id = user.id, "authenticated");
    Ok(Identity::from(user))
}
