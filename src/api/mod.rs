use axum::Json;
use axum::extract::Path;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::error::AppError;
use crate::models::{Course, CourseDraft, CourseRequest};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/courses", get(list_courses).post(create_course))
        .route(
            "/api/courses/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A course needs a non-empty name before it reaches the service.
fn require_title(req: CourseRequest) -> Result<CourseDraft, AppError> {
    match req.name {
        Some(name) if !name.is_empty() => Ok(CourseDraft {
            name,
            description: req.description,
        }),
        _ => Err(AppError::title_required()),
    }
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.courses.health().await?;
    Ok(StatusCode::OK)
}

async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    let courses = state.courses.list_all().await?;
    Ok(Json(courses))
}

async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Course>, AppError> {
    let course = state
        .courses
        .get_by_id(id.into())
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(course))
}

async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<CourseRequest>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let draft = require_title(req)?;
    let name = draft.name.clone();

    match state.courses.create(draft).await? {
        Some(course) => Ok((StatusCode::CREATED, Json(course))),
        None => {
            warn!("course {:?} already exists", name);
            Err(AppError::duplicate_title(&name))
        }
    }
}

async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<CourseRequest>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let draft = require_title(req)?;
    let course = state
        .courses
        .update(id.into(), draft)
        .await?
        .ok_or_else(|| AppError::unknown_update_target(id.into()))?;
    Ok((StatusCode::CREATED, Json(course)))
}

async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let ok = state.courses.delete(id.into()).await?;
    if ok {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::CourseNotFound(id.into()))
    }
}
