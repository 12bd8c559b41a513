use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{Course, NewCourse};

/// Storage for courses, keyed by the integer id the store assigns on insert.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn insert(&self, course: NewCourse) -> Result<Course, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, AppError>;
    async fn find_all(&self) -> Result<Vec<Course>, AppError>;
    /// Overwrites every mutable column of an existing row.
    async fn save(&self, course: &Course) -> Result<Course, AppError>;
    async fn delete(&self, course: &Course) -> Result<(), AppError>;
    async fn ping(&self) -> Result<(), AppError>;
}
