use tracing::{info, warn};

use super::{
    dto::CourseRequest,
    repo::CourseRepo,
    repo_types::{Course, CourseDraft, CourseWithOwner},
    validation::validate_course,
};
use crate::{auth::Identity, error::AppError};

/// Only the user referenced by `course.user_id` may change or remove it.
pub fn ensure_owner(identity: &Identity, course: &Course) -> Result<(), AppError> {
    if identity.id == course.user_id {
        Ok(())
    } else {
        warn!(
            user_id = identity.id,
            course_id = course.id,
            owner_id = course.user_id,
            "caller does not own course"
        );
        Err(AppError::Forbidden)
    }
}

pub async fn list(repo: &dyn CourseRepo) -> Result<Vec<CourseWithOwner>, AppError> {
    repo.list().await
}

pub async fn get(repo: &dyn CourseRepo, id: i64) -> Result<CourseWithOwner, AppError> {
    repo.find(id).await?.ok_or(AppError::NotFound("Course"))
}

pub async fn create(
    repo: &dyn CourseRepo,
    identity: &Identity,
    req: CourseRequest,
) -> Result<i64, AppError> {
    let draft = req.apply_to(CourseDraft::default());
    AppError::check(validate_course(&draft))?;

    let course = repo.insert(identity.id, draft).await?;
    info!(course_id = course.id, user_id = identity.id, "course created");
    Ok(course.id)
}

/// Loads course `id` for a change by `identity`: `NotFound` when it does not
/// exist, `Forbidden` when the caller is not its owner.
pub async fn owned_course(
    repo: &dyn CourseRepo,
    identity: &Identity,
    id: i64,
) -> Result<Course, AppError> {
    let existing = get(repo, id).await?;
    ensure_owner(identity, &existing.course)?;
    Ok(existing.course)
}

/// Merges `req` into a course already returned by [`owned_course`].
pub async fn update(
    repo: &dyn CourseRepo,
    identity: &Identity,
    existing: Course,
    req: CourseRequest,
) -> Result<(), AppError> {
    let draft = req.apply_to(CourseDraft::from(&existing));
    AppError::check(validate_course(&draft))?;

    if !repo.update(existing.id, draft).await? {
        return Err(AppError::NotFound("Course"));
    }
    info!(course_id = existing.id, user_id = identity.id, "course updated");
    Ok(())
}

pub async fn delete(repo: &dyn CourseRepo, identity: &Identity, id: i64) -> Result<(), AppError> {
    owned_course(repo, identity, id).await?;

    if !repo.delete(id).await? {
        return Err(AppError::NotFound("Course"));
    }
    info!(course_id = id, user_id = identity.id, "course deleted");
    Ok(())
}
