use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "timestamp", default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(with = "timestamp", default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Body accepted by both `POST` and `PUT`. Server-owned fields a client may
/// echo back (`id`, `createdAt`, `updatedAt`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A request whose name has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    pub name: String,
    pub description: Option<String>,
}

/// Row handed to the repository on insert; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Course {
    pub fn from_insert(id: i64, new: NewCourse) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            created_at: Some(new.created_at),
            updated_at: None,
        }
    }
}
