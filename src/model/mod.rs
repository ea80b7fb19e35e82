pub mod user;
pub mod course;
