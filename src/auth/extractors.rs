use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use super::{credentials::Credentials, services::authenticate, Identity};
use crate::{error::AppError, state::AppState};

/// Runs Basic authentication for the current request and yields the caller.
/// Nothing is cached between requests.
pub struct AuthUser(pub Identity);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let creds = Credentials::from_headers(&parts.headers);
        let identity = authenticate(state.users.as_ref(), creds).await?;
        Ok(AuthUser(identity))
    }
}
