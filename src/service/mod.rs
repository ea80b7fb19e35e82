pub mod account_service;
pub mod course_service;
