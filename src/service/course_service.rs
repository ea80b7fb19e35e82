use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{error, info, instrument};

use crate::model::course::{Course, NewCourse};
use crate::repository::course_repo::CourseRepository;
use crate::util::error::{messages, ServiceError};

#[async_trait]
pub trait CourseService: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<Course>, ServiceError>;
    async fn create_course(&self, course: NewCourse) -> Result<Course, ServiceError>;
    async fn delete_course(&self, id: &str) -> Result<(), ServiceError>;
}

pub struct CourseServiceImpl {
    pub course_repo: Arc<dyn CourseRepository>,
}

impl CourseServiceImpl {
    pub fn new(course_repo: Arc<dyn CourseRepository>) -> Self {
        Self { course_repo }
    }
}

#[async_trait]
impl CourseService for CourseServiceImpl {
    #[instrument(skip(self))]
    async fn list_courses(&self) -> Result<Vec<Course>, ServiceError> {
        let courses = self.course_repo.find().await?;
        info!("Listing {} courses", courses.len());
        Ok(courses)
    }

    #[instrument(skip(self, course), fields(title = %course.title))]
    async fn create_course(&self, course: NewCourse) -> Result<Course, ServiceError> {
        info!("Creating course");
        let created = self.course_repo.insert(course.into_course()).await;
        if let Err(e) = &created {
            error!("Failed to create course: {e}");
        }
        Ok(created?)
    }

    /// A malformed identifier is a store error, not a missing course.
    #[instrument(skip(self))]
    async fn delete_course(&self, id: &str) -> Result<(), ServiceError> {
        let object_id = ObjectId::parse_str(id).map_err(|e| {
            error!("Malformed course id {}: {}", id, e);
            ServiceError::Store(format!("Malformed course id {}: {}", id, e))
        })?;
        match self.course_repo.delete_by_id(object_id).await? {
            Some(_) => {
                info!("Course deleted");
                Ok(())
            }
            None => Err(ServiceError::NotFound(messages::COURSE_NOT_FOUND.to_string())),
        }
    }
}
