use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, warn};

use crate::dto::course_dto::{CourseResponse, CreateCourseRequest, CreateCourseResponse};
use crate::dto::user_dto::MessageResponse;
use crate::service::course_service::CourseService;
use crate::util::error::{messages, HandlerError, ServiceError};

pub async fn list_courses_handler(
    State(service): State<Arc<dyn CourseService>>,
) -> Result<impl IntoResponse, HandlerError> {
    let courses = service
        .list_courses()
        .await
        .map_err(|e| HandlerError::from_service(e, messages::COURSE_LIST_FAILED))?;
    let body: Vec<CourseResponse> = courses.into_iter().map(CourseResponse::from).collect();
    Ok(Json(body))
}

pub async fn create_course_handler(
    State(service): State<Arc<dyn CourseService>>,
    payload: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let Json(payload) = payload.map_err(|e| {
        warn!("Rejected course body: {}", e);
        HandlerError::bad_request(messages::COURSE_MISSING_FIELDS)
    })?;
    let new_course = payload
        .into_new_course()
        .map_err(|e| HandlerError::from_service(e, messages::COURSE_CREATE_FAILED))?;
    let created = service
        .create_course(new_course)
        .await
        .map_err(|e| HandlerError::from_service(e, messages::COURSE_CREATE_FAILED))?;
    info!("Course created");
    let body = CreateCourseResponse {
        message: messages::COURSE_CREATED.to_string(),
        newCourse: CourseResponse::from(created),
    };
    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn delete_course_handler(
    State(service): State<Arc<dyn CourseService>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    match service.delete_course(&id).await {
        Ok(()) => Ok(Json(MessageResponse::new(messages::COURSE_DELETED))),
        Err(ServiceError::NotFound(msg)) => Err(HandlerError::not_found(msg)),
        Err(e) => Err(HandlerError::from_service(e, messages::COURSE_DELETE_FAILED)),
    }
}
