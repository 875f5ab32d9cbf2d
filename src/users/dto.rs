use serde::{Deserialize, Serialize};

use crate::auth::Identity;

/// Request body for `POST /users`. Every field is optional on the wire so a
/// missing field is reported as a validation error instead of a parse error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    pub password: Option<String>,
}

/// Body of `GET /users`.
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub id: i64,
    pub login: String,
    pub forename: String,
    pub surname: String,
}

impl From<Identity> for CurrentUserResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            login: identity.email_address,
            forename: identity.first_name,
            surname: identity.last_name,
        }
    }
}
