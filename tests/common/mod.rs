#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use bson::oid::ObjectId;
use http_body_util::BodyExt;
use tower::ServiceExt; // for .oneshot()

use campus_backend::model::course::Course;
use campus_backend::model::user::User;
use campus_backend::repository::course_repo::CourseRepository;
use campus_backend::repository::repository_error::{RepositoryError, RepositoryResult};
use campus_backend::repository::user_repo::UserRepository;
use campus_backend::router::create_router;
use campus_backend::service::account_service::AccountServiceImpl;
use campus_backend::service::course_service::CourseServiceImpl;

#[derive(Default)]
pub struct InMemoryUserRepository {
    pub users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, mut user: User) -> RepositoryResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::already_exists("Duplicate key: email"));
        }
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryCourseRepository {
    pub courses: Mutex<Vec<Course>>,
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find(&self) -> RepositoryResult<Vec<Course>> {
        Ok(self.courses.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Course>> {
        Ok(self.courses.lock().unwrap().iter().find(|c| c.id == Some(id)).cloned())
    }

    async fn insert(&self, mut course: Course) -> RepositoryResult<Course> {
        course.id = Some(ObjectId::new());
        self.courses.lock().unwrap().push(course.clone());
        Ok(course)
    }

    async fn delete_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Course>> {
        let mut courses = self.courses.lock().unwrap();
        let position = courses.iter().position(|c| c.id == Some(id));
        Ok(position.map(|i| courses.remove(i)))
    }
}

/// Course store whose every call fails like an unreachable database.
pub struct FailingCourseRepository;

#[async_trait]
impl CourseRepository for FailingCourseRepository {
    async fn find(&self) -> RepositoryResult<Vec<Course>> {
        Err(RepositoryError::database("connection refused"))
    }

    async fn find_by_id(&self, _id: ObjectId) -> RepositoryResult<Option<Course>> {
        Err(RepositoryError::database("connection refused"))
    }

    async fn insert(&self, _course: Course) -> RepositoryResult<Course> {
        Err(RepositoryError::database("connection refused"))
    }

    async fn delete_by_id(&self, _id: ObjectId) -> RepositoryResult<Option<Course>> {
        Err(RepositoryError::database("connection refused"))
    }
}

/// User store whose every call fails like an unreachable database.
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn insert(&self, _user: User) -> RepositoryResult<User> {
        Err(RepositoryError::database("connection refused"))
    }

    async fn find(&self) -> RepositoryResult<Vec<User>> {
        Err(RepositoryError::database("connection refused"))
    }

    async fn find_by_email(&self, _email: &str) -> RepositoryResult<Option<User>> {
        Err(RepositoryError::database("connection refused"))
    }
}

pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepository>,
    pub courses: Arc<InMemoryCourseRepository>,
}

pub fn test_app() -> TestApp {
    let users = Arc::new(InMemoryUserRepository::default());
    let courses = Arc::new(InMemoryCourseRepository::default());
    let router = create_router(
        Arc::new(AccountServiceImpl::new(users.clone())),
        Arc::new(CourseServiceImpl::new(courses.clone())),
    );
    TestApp { router, users, courses }
}

pub fn failing_app() -> Router {
    create_router(
        Arc::new(AccountServiceImpl::new(Arc::new(FailingUserRepository))),
        Arc::new(CourseServiceImpl::new(Arc::new(FailingCourseRepository))),
    )
}

pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()
}

/// Sends the request and returns the status with the body parsed as JSON.
pub async fn send(router: &Router, req: Request<Body>) -> (axum::http::StatusCode, serde_json::Value) {
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let body_bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&body_bytes).into_owned()))
    };
    (status, body)
}
