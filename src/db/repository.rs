use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{Course, NewCourse};
use crate::repository::CourseRepository;

#[derive(Clone)]
pub struct SqliteCourseRepository {
    db: SqlitePool,
}

impl SqliteCourseRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseRepository for SqliteCourseRepository {
    async fn insert(&self, course: NewCourse) -> Result<Course, AppError> {
        let id = sqlx::query(
            "INSERT INTO courses (name, description, created_at, updated_at) VALUES (?, ?, ?, NULL)"
        )
        .bind(&course.name)
        .bind(&course.description)
        .bind(course.created_at)
        .execute(&self.db)
        .await?
        .last_insert_rowid();

        Ok(Course::from_insert(id, course))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let course = sqlx::query_as::<_, Course>(
            "SELECT id, name, description, created_at, updated_at FROM courses WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(course)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, AppError> {
        let course = sqlx::query_as::<_, Course>(
            "SELECT id, name, description, created_at, updated_at FROM courses WHERE name = ? ORDER BY id LIMIT 1"
        )
        .bind(name)
        .fetch_optional(&self.db)
        .await?;
        Ok(course)
    }

    async fn find_all(&self) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, name, description, created_at, updated_at FROM courses ORDER BY id"
        )
        .fetch_all(&self.db)
        .await?;
        Ok(courses)
    }

    async fn save(&self, course: &Course) -> Result<Course, AppError> {
        let affected = sqlx::query(
            "UPDATE courses SET name = ?, description = ?, created_at = ?, updated_at = ? WHERE id = ?"
        )
        .bind(&course.name)
        .bind(&course.description)
        .bind(course.created_at)
        .bind(course.updated_at)
        .bind(course.id)
        .execute(&self.db)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(AppError::Database(sqlx::Error::RowNotFound));
        }
        Ok(course.clone())
    }

    async fn delete(&self, course: &Course) -> Result<(), AppError> {
        sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(course.id)
            .execute(&self.db)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("select 1").execute(&self.db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;
    use crate::models::timestamp;

    async fn setup_test_db() -> SqlitePool {
        // a single connection, otherwise every pooled connection opens its own empty database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test db");

        crate::db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }

    fn new_course(name: &str) -> NewCourse {
        NewCourse {
            name: name.to_string(),
            description: Some("basics".to_string()),
            created_at: timestamp::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_course() {
        let repo = SqliteCourseRepository::new(setup_test_db().await);

        let course = repo.insert(new_course("Intro to Go")).await.expect("Failed to insert course");
        assert_eq!(course.id, 1);
        assert_eq!(course.name, "Intro to Go");
        assert!(course.created_at.is_some());
        assert!(course.updated_at.is_none());

        let found = repo
            .find_by_id(course.id)
            .await
            .expect("Failed to fetch course")
            .expect("Course not found");
        assert_eq!(found, course);

        let by_name = repo.find_by_name("Intro to Go").await.expect("Failed to fetch course");
        assert_eq!(by_name, Some(course));
        assert!(repo.find_by_name("Rust").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_in_id_order() {
        let repo = SqliteCourseRepository::new(setup_test_db().await);
        assert!(repo.find_all().await.unwrap().is_empty());

        repo.insert(new_course("A")).await.unwrap();
        repo.insert(new_course("B")).await.unwrap();

        let names: Vec<String> = repo.find_all().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_save_course() {
        let repo = SqliteCourseRepository::new(setup_test_db().await);
        let mut course = repo.insert(new_course("Old")).await.unwrap();

        course.name = "New".to_string();
        course.updated_at = Some(timestamp::now());
        repo.save(&course).await.expect("Failed to save course");

        let stored = repo.find_by_id(course.id).await.unwrap().unwrap();
        assert_eq!(stored, course);
    }

    #[tokio::test]
    async fn test_save_missing_row_fails() {
        let repo = SqliteCourseRepository::new(setup_test_db().await);
        let ghost = Course::from_insert(42, new_course("Ghost"));
        assert!(matches!(repo.save(&ghost).await, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_delete_course() {
        let repo = SqliteCourseRepository::new(setup_test_db().await);
        let course = repo.insert(new_course("Temp")).await.unwrap();

        repo.delete(&course).await.expect("Failed to delete course");
        assert!(repo.find_by_id(course.id).await.unwrap().is_none());

        // ids are not reused after a delete
        let next = repo.insert(new_course("Temp")).await.unwrap();
        assert_eq!(next.id, course.id + 1);
    }

    #[tokio::test]
    async fn test_ping() {
        let repo = SqliteCourseRepository::new(setup_test_db().await);
        repo.ping().await.expect("ping failed");
    }
}
