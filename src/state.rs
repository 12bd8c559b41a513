use crate::services::CourseService;

#[derive(Clone)]
pub struct AppState {
    pub courses: CourseService,
}
