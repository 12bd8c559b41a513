use std::sync::Arc;

use tracing::{debug, info};

use crate::error::AppError;
use crate::models::{Course, CourseDraft, NewCourse, timestamp};
use crate::repository::CourseRepository;

/// Business rules for courses. Absence is reported as `None`/`false`, never
/// as an error; only storage faults come back as `Err`.
#[derive(Clone)]
pub struct CourseService {
    repo: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_all(&self) -> Result<Vec<Course>, AppError> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        self.repo.find_by_id(id).await
    }

    /// Returns `None` when a course with the same name already exists.
    pub async fn create(&self, draft: CourseDraft) -> Result<Option<Course>, AppError> {
        if self.repo.find_by_name(&draft.name).await?.is_some() {
            debug!("rejecting duplicate course name {:?}", draft.name);
            return Ok(None);
        }

        let course = self
            .repo
            .insert(NewCourse {
                name: draft.name,
                description: draft.description,
                created_at: timestamp::now(),
            })
            .await?;

        info!("created course {} ({})", course.id, course.name);
        Ok(Some(course))
    }

    /// Renames the course and stamps `updated_at`. The description and the
    /// name uniqueness rule are left alone.
    pub async fn update(&self, id: i64, draft: CourseDraft) -> Result<Option<Course>, AppError> {
        let mut existing = match self.repo.find_by_id(id).await? {
            Some(c) => c,
            None => return Ok(None),
        };

        existing.name = draft.name;
        existing.updated_at = Some(timestamp::now());

        let saved = self.repo.save(&existing).await?;
        info!("updated course {}", saved.id);
        Ok(Some(saved))
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        match self.repo.find_by_id(id).await? {
            Some(existing) => {
                self.repo.delete(&existing).await?;
                info!("deleted course {}", id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn health(&self) -> Result<(), AppError> {
        self.repo.ping().await
    }
}
