//! In-process implementations of the repository traits for tests.

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::courses::{
    repo::CourseRepo,
    repo_types::{Course, CourseDraft, CourseWithOwner, OwnerProfile},
};
use crate::error::AppError;
use crate::users::{
    repo::UserRepo,
    repo_types::{NewUser, User},
};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    courses: Vec<Course>,
    next_user_id: i64,
    next_course_id: i64,
}

impl Tables {
    fn owner_of(&self, course: &Course) -> Option<OwnerProfile> {
        self.users
            .iter()
            .find(|u| u.id == course.user_id)
            .map(|u| OwnerProfile {
                id: u.id,
                first_name: u.first_name.clone(),
                last_name: u.last_name.clone(),
                email_address: u.email_address.clone(),
            })
    }

    fn joined(&self, course: &Course) -> Option<CourseWithOwner> {
        self.owner_of(course).map(|owner| CourseWithOwner {
            course: course.clone(),
            owner,
        })
    }
}

/// Mirrors the database constraints: unique email, owner must exist.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[async_trait]
impl UserRepo for MemoryStore {
    async fn insert(&self, new: NewUser) -> Result<User, AppError> {
        let mut t = self.tables.write().await;
        if t.users.iter().any(|u| u.email_address == new.email_address) {
            return Err(AppError::UniqueConstraintViolation("emailAddress"));
        }
        t.next_user_id += 1;
        let now = OffsetDateTime::now_utc();
        let user = User {
            id: t.next_user_id,
            first_name: new.first_name,
            last_name: new.last_name,
            email_address: new.email_address,
            password_hash: new.password_hash,
            created_at: now,
            updated_at: now,
        };
        t.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let t = self.tables.read().await;
        Ok(t.users.iter().find(|u| u.email_address == email).cloned())
    }
}

#[async_trait]
impl CourseRepo for MemoryStore {
    async fn list(&self) -> Result<Vec<CourseWithOwner>, AppError> {
        let t = self.tables.read().await;
        Ok(t.courses.iter().filter_map(|c| t.joined(c)).collect())
    }

    async fn find(&self, id: i64) -> Result<Option<CourseWithOwner>, AppError> {
        let t = self.tables.read().await;
        Ok(t.courses.iter().find(|c| c.id == id).and_then(|c| t.joined(c)))
    }

    async fn insert(&self, owner_id: i64, draft: CourseDraft) -> Result<Course, AppError> {
        let mut t = self.tables.write().await;
        if !t.users.iter().any(|u| u.id == owner_id) {
            return Err(AppError::Unexpected(anyhow::anyhow!(
                "foreign key violation: user {owner_id} does not exist"
            )));
        }
        t.next_course_id += 1;
        let now = OffsetDateTime::now_utc();
        let course = Course {
            id: t.next_course_id,
            title: draft.title,
            description: draft.description,
            estimated_time: draft.estimated_time,
            materials_needed: draft.materials_needed,
            user_id: owner_id,
            created_at: now,
            updated_at: now,
        };
        t.courses.push(course.clone());
        Ok(course)
    }

    async fn update(&self, id: i64, draft: CourseDraft) -> Result<bool, AppError> {
        let mut t = self.tables.write().await;
        let Some(course) = t.courses.iter_mut().find(|c| c.id == id) else {
            return Ok(false);
        };
        course.title = draft.title;
        course.description = draft.description;
        course.estimated_time = draft.estimated_time;
        course.materials_needed = draft.materials_needed;
        course.updated_at = OffsetDateTime::now_utc();
        Ok(true)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut t = self.tables.write().await;
        let before = t.courses.len();
        t.courses.retain(|c| c.id != id);
        Ok(t.courses.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            first_name: "Jo".into(),
            last_name: "Lee".into(),
            email_address: email.into(),
            password_hash: "$argon2id$stub".into(),
        }
    }

    #[tokio::test]
    async fn concurrent_duplicate_signup_has_one_winner() {
        let store = Arc::new(MemoryStore::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { UserRepo::insert(&*store, new_user("jo@x.com")).await })
            })
            .collect();

        let mut ok = 0;
        let mut dup = 0;
        for h in handles {
            match h.await.unwrap() {
                Ok(_) => ok += 1,
                Err(AppError::UniqueConstraintViolation(_)) => dup += 1,
                Err(other) => panic!("unexpected {other:?}"),
            }
        }
        assert_eq!((ok, dup), (1, 7));
    }

    #[tokio::test]
    async fn course_requires_existing_owner() {
        let store = MemoryStore::default();
        let draft = CourseDraft {
            title: "t".into(),
            description: "d".into(),
            ..Default::default()
        };
        assert!(CourseRepo::insert(&store, 42, draft).await.is_err());
    }
}
