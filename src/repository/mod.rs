pub mod repository_error;
pub mod mongo_client;
pub mod user_repo;
pub mod course_repo;
pub mod unavailable_store;
