use async_trait::async_trait;
use sqlx::PgPool;

use super::repo_types::{Course, CourseDraft, CourseOwnerRow, CourseWithOwner};
use crate::error::AppError;

#[async_trait]
pub trait CourseRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<CourseWithOwner>, AppError>;
    async fn find(&self, id: i64) -> Result<Option<CourseWithOwner>, AppError>;
    async fn insert(&self, owner_id: i64, draft: CourseDraft) -> Result<Course, AppError>;
    /// Returns false when no row has `id`.
    async fn update(&self, id: i64, draft: CourseDraft) -> Result<bool, AppError>;
    /// Returns false when no row has `id`.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

const SELECT_WITH_OWNER: &str = r#"
    SELECT c.id, c.title, c.description, c.estimated_time, c.materials_needed,
           c.user_id, c.created_at, c.updated_at,
           u.first_name    AS owner_first_name,
           u.last_name     AS owner_last_name,
           u.email_address AS owner_email_address
      FROM courses c
      JOIN users u ON u.id = c.user_id
"#;

#[derive(Clone)]
pub struct PgCourseRepo {
    db: PgPool,
}

impl PgCourseRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseRepo for PgCourseRepo {
    async fn list(&self) -> Result<Vec<CourseWithOwner>, AppError> {
        let rows = sqlx::query_as::<_, CourseOwnerRow>(&format!(
            "{SELECT_WITH_OWNER} ORDER BY c.id ASC"
        ))
        .fetch_all(&self.db)
        .await?;
        Ok(rows.into_iter().map(CourseWithOwner::from).collect())
    }

    async fn find(&self, id: i64) -> Result<Option<CourseWithOwner>, AppError> {
        let row = sqlx::query_as::<_, CourseOwnerRow>(&format!(
            "{SELECT_WITH_OWNER} WHERE c.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row.map(CourseWithOwner::from))
    }

    async fn insert(&self, owner_id: i64, draft: CourseDraft) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (title, description, estimated_time, materials_needed, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, estimated_time, materials_needed,
                      user_id, created_at, updated_at
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.estimated_time)
        .bind(&draft.materials_needed)
        .bind(owner_id)
        .fetch_one(&self.db)
        .await?;
        Ok(course)
    }

    async fn update(&self, id: i64, draft: CourseDraft) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE courses
               SET title = $2, description = $3, estimated_time = $4,
                   materials_needed = $5, updated_at = now()
             WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.estimated_time)
        .bind(&draft.materials_needed)
        .execute(&self.db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{test_pool, unique_email};
    use crate::users::repo::{PgUserRepo, UserRepo};
    use crate::users::repo_types::NewUser;

    async fn owner(pool: &PgPool) -> i64 {
        UserRepo::insert(
            &PgUserRepo::new(pool.clone()),
            NewUser {
                first_name: "Ann".into(),
                last_name: "Smith".into(),
                email_address: unique_email("owner"),
                password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaA".into(),
            },
        )
        .await
        .unwrap()
        .id
    }

    fn draft(title: &str) -> CourseDraft {
        CourseDraft {
            title: title.into(),
            description: "Basics".into(),
            estimated_time: Some("6 hours".into()),
            materials_needed: None,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn find_joins_owner_profile() {
        let pool = test_pool().await;
        let owner_id = owner(&pool).await;
        let repo = PgCourseRepo::new(pool);

        let course = repo.insert(owner_id, draft("SQL")).await.unwrap();
        let found = repo.find(course.id).await.unwrap().unwrap();
        assert_eq!(found.course.user_id, owner_id);
        assert_eq!(found.owner.id, owner_id);
        assert_eq!(found.owner.first_name, "Ann");
        assert_eq!(found.owner.last_name, "Smith");
        assert!(found.owner.email_address.starts_with("owner-"));
        assert_eq!(found.course.estimated_time.as_deref(), Some("6 hours"));

        assert!(repo
            .list()
            .await
            .unwrap()
            .iter()
            .any(|c| c.course.id == course.id && c.owner.id == owner_id));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_and_delete_report_missing_rows() {
        let pool = test_pool().await;
        let owner_id = owner(&pool).await;
        let repo = PgCourseRepo::new(pool);

        let course = repo.insert(owner_id, draft("Old")).await.unwrap();
        assert!(repo.update(course.id, draft("New")).await.unwrap());
        assert_eq!(repo.find(course.id).await.unwrap().unwrap().course.title, "New");

        assert!(repo.delete(course.id).await.unwrap());
        assert!(!repo.delete(course.id).await.unwrap());
        assert!(!repo.update(course.id, draft("Gone")).await.unwrap());
        assert!(repo.find(course.id).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_owner_is_rejected_by_foreign_key() {
        let repo = PgCourseRepo::new(test_pool().await);
        assert!(repo.insert(i64::MAX, draft("Orphan")).await.is_err());
    }
}
