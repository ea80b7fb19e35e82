pub mod account_handler;
pub mod course_handler;
