use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_TEACHER: &str = "teacher";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub fullname: String,
    pub email: String,
    pub role: String, // "student" or "teacher"
    pub course: Option<String>,
    pub subject: Option<String>,
    /// bcrypt hash, never the plaintext
    pub password: String,
}

/// Registration data that already passed boundary validation.
#[derive(Debug, Clone)]
pub struct Registration {
    pub fullname: String,
    pub email: String,
    pub role: String,
    pub course: Option<String>,
    pub subject: Option<String>,
    pub password: String,
}

impl Registration {
    /// Builds the stored record. `course` survives only for students and
    /// `subject` only for teachers.
    pub fn into_user(self, password_hash: String) -> User {
        let course = if self.role == ROLE_STUDENT { self.course } else { None };
        let subject = if self.role == ROLE_TEACHER { self.subject } else { None };
        User {
            id: None,
            fullname: self.fullname,
            email: self.email,
            role: self.role,
            course,
            subject,
            password: password_hash,
        }
    }
}
