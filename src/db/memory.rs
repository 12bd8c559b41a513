use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::models::{Course, NewCourse};
use crate::repository::CourseRepository;

/// Process-local store. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryCourseRepository {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    courses: BTreeMap<i64, Course>,
    last_id: i64,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn insert(&self, course: NewCourse) -> Result<Course, AppError> {
        let mut state = self.state.lock().await;
        state.last_id += 1;
        let course = Course::from_insert(state.last_id, course);
        state.courses.insert(course.id, course.clone());
        Ok(course)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        Ok(self.state.lock().await.courses.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, AppError> {
        let state = self.state.lock().await;
        Ok(state.courses.values().find(|c| c.name == name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.state.lock().await.courses.values().cloned().collect())
    }

    async fn save(&self, course: &Course) -> Result<Course, AppError> {
        let mut state = self.state.lock().await;
        match state.courses.get_mut(&course.id) {
            Some(slot) => {
                *slot = course.clone();
                Ok(course.clone())
            }
            None => Err(AppError::Database(sqlx::Error::RowNotFound)),
        }
    }

    async fn delete(&self, course: &Course) -> Result<(), AppError> {
        self.state.lock().await.courses.remove(&course.id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
