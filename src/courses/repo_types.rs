use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

/// Course record in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i64, // owner-reference
    #[allow(dead_code)]
    #[serde(skip_serializing)]
    pub created_at: OffsetDateTime,
    #[allow(dead_code)]
    #[serde(skip_serializing)]
    pub updated_at: OffsetDateTime,
}

/// Public profile of a course owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseWithOwner {
    #[serde(flatten)]
    pub course: Course,
    pub owner: OwnerProfile,
}

/// Flat row of `courses JOIN users`.
#[derive(Debug, FromRow)]
pub struct CourseOwnerRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub owner_first_name: String,
    pub owner_last_name: String,
    pub owner_email_address: String,
}

impl From<CourseOwnerRow> for CourseWithOwner {
    fn from(r: CourseOwnerRow) -> Self {
        Self {
            owner: OwnerProfile {
                id: r.user_id,
                first_name: r.owner_first_name,
                last_name: r.owner_last_name,
                email_address: r.owner_email_address,
            },
            course: Course {
                id: r.id,
                title: r.title,
                description: r.description,
                estimated_time: r.estimated_time,
                materials_needed: r.materials_needed,
                user_id: r.user_id,
                created_at: r.created_at,
                updated_at: r.updated_at,
            },
        }
    }
}

/// Writable course fields, validated before they are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

impl From<&Course> for CourseDraft {
    fn from(c: &Course) -> Self {
        Self {
            title: c.title.clone(),
            description: c.description.clone(),
            estimated_time: c.estimated_time.clone(),
            materials_needed: c.materials_needed.clone(),
        }
    }
}
