use axum::{routing::{delete, get}, Router};
use std::sync::Arc;

use crate::handler::course_handler::{
    create_course_handler,
    delete_course_handler,
    list_courses_handler,
};
use crate::service::course_service::CourseService;

// Course mutation routes are open to any caller.
pub fn course_router(service: Arc<dyn CourseService>) -> Router {
    Router::new()
        .route("/courses", get(list_courses_handler).post(create_course_handler))
        .route("/courses/{id}", delete(delete_course_handler))
        .with_state(service)
}
