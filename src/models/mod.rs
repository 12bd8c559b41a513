pub mod course;
pub mod timestamp;

pub use course::{Course, CourseDraft, CourseRequest, NewCourse};
