use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{
    dto::{CurrentUserResponse, NewUserRequest},
    services,
};
use crate::{auth::extractors::AuthUser, error::AppError, state::AppState};

pub fn users_routes() -> Router<AppState> {
    Router::new().route("/users", get(current_user).post(create_user))
}

#[instrument(skip_all)]
pub async fn current_user(AuthUser(identity): AuthUser) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse::from(identity))
}

#[instrument(skip_all)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<NewUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    services::register(state.users.as_ref(), req).await?;
    Ok((StatusCode::CREATED, [(header::LOCATION, "/")]))
}
