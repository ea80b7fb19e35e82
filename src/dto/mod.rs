pub mod user_dto;
pub mod course_dto;
