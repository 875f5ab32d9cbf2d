use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use tracing::instrument;

use super::{dto::CourseRequest, repo_types::CourseWithOwner, services};
use crate::{auth::extractors::AuthUser, error::AppError, state::AppState};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(list_courses))
        .route("/courses/:id", get(get_course))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", post(create_course))
        .route("/courses/:id", put(update_course).delete(delete_course))
}

fn course_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

#[instrument(skip(state))]
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseWithOwner>>, AppError> {
    Ok(Json(services::list(state.courses.as_ref()).await?))
}

#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<CourseWithOwner>, AppError> {
    let id = course_id(path)?;
    Ok(Json(services::get(state.courses.as_ref(), id).await?))
}

#[instrument(skip_all)]
pub async fn create_course(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let req = json_body(payload)?;
    let id = services::create(state.courses.as_ref(), &identity, req).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/courses/{id}"))],
    ))
}

#[instrument(skip_all)]
pub async fn update_course(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let id = course_id(path)?;
    let existing = services::owned_course(state.courses.as_ref(), &identity, id).await?;
    let req = json_body(payload)?;
    services::update(state.courses.as_ref(), &identity, existing, req).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip_all)]
pub async fn delete_course(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = course_id(path)?;
    services::delete(state.courses.as_ref(), &identity, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
