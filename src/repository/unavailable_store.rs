use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::error;

use crate::model::course::Course;
use crate::model::user::User;
use crate::repository::course_repo::CourseRepository;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::repository::user_repo::UserRepository;

/// Stands in for both stores when no database client could be built, so the
/// server still listens and every store-backed call fails with a connection
/// error.
#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new<T: Into<String>>(reason: T) -> Self {
        UnavailableStore { reason: reason.into() }
    }

    fn fail<T>(&self, operation: &str) -> RepositoryResult<T> {
        error!("{} skipped, database unavailable: {}", operation, self.reason);
        Err(RepositoryError::connection(format!("Database unavailable: {}", self.reason)))
    }
}

#[async_trait]
impl UserRepository for UnavailableStore {
    async fn insert(&self, _user: User) -> RepositoryResult<User> {
        self.fail("User insert")
    }

    async fn find(&self) -> RepositoryResult<Vec<User>> {
        self.fail("User listing")
    }

    async fn find_by_email(&self, _email: &str) -> RepositoryResult<Option<User>> {
        self.fail("User lookup")
    }
}

#[async_trait]
impl CourseRepository for UnavailableStore {
    async fn find(&self) -> RepositoryResult<Vec<Course>> {
        self.fail("Course listing")
    }

    async fn find_by_id(&self, _id: ObjectId) -> RepositoryResult<Option<Course>> {
        self.fail("Course lookup")
    }

    async fn insert(&self, _course: Course) -> RepositoryResult<Course> {
        self.fail("Course insert")
    }

    async fn delete_by_id(&self, _id: ObjectId) -> RepositoryResult<Option<Course>> {
        self.fail("Course delete")
    }
}
