use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::user::Registration;
use crate::util::error::{messages, ServiceError};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(required, length(min = 1))]
    pub fullname: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub role: Option<String>,
    pub course: Option<String>,
    pub subject: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

impl RegisterRequest {
    pub fn into_registration(self) -> Result<Registration, ServiceError> {
        if self.validate().is_err() {
            return Err(ServiceError::Validation(messages::REGISTER_MISSING_FIELDS.to_string()));
        }
        match (self.fullname, self.email, self.role, self.password) {
            (Some(fullname), Some(email), Some(role), Some(password)) => Ok(Registration {
                fullname,
                email,
                role,
                course: self.course,
                subject: self.subject,
                password,
            }),
            _ => Err(ServiceError::Validation(messages::REGISTER_MISSING_FIELDS.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Returns `(email, password)` once both are present and non-empty.
    pub fn into_credentials(self) -> Result<(String, String), ServiceError> {
        if self.validate().is_err() {
            return Err(ServiceError::Validation(messages::LOGIN_MISSING_FIELDS.to_string()));
        }
        match (self.email, self.password) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(ServiceError::Validation(messages::LOGIN_MISSING_FIELDS.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<T: Into<String>>(message: T) -> Self {
        MessageResponse { message: message.into() }
    }
}

/// Login echoes the account's role and name; no credential is issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub role: String,
    pub fullname: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> RegisterRequest {
        RegisterRequest {
            fullname: Some("Grace Hopper".to_string()),
            email: Some("grace@example.com".to_string()),
            role: Some("teacher".to_string()),
            course: None,
            subject: Some("Compilers".to_string()),
            password: Some("cobol".to_string()),
        }
    }

    #[test]
    fn test_complete_registration_passes() {
        let registration = full_request().into_registration().unwrap();
        assert_eq!(registration.email, "grace@example.com");
        assert_eq!(registration.subject.as_deref(), Some("Compilers"));
    }

    #[test]
    fn test_missing_or_empty_required_field_fails() {
        for field in ["fullname", "email", "role", "password"] {
            for replacement in [None, Some(String::new())] {
                let mut request = full_request();
                let slot = match field {
                    "fullname" => &mut request.fullname,
                    "email" => &mut request.email,
                    "role" => &mut request.role,
                    _ => &mut request.password,
                };
                *slot = replacement;
                let err = request.into_registration().unwrap_err();
                assert!(matches!(err, ServiceError::Validation(ref m) if m == messages::REGISTER_MISSING_FIELDS));
            }
        }
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let mut request = full_request();
        request.course = None;
        request.subject = None;
        assert!(request.into_registration().is_ok());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let request = LoginRequest { email: Some("a@b.c".to_string()), password: None };
        assert!(request.into_credentials().is_err());

        let request = LoginRequest { email: Some(String::new()), password: Some("pw".to_string()) };
        assert!(request.into_credentials().is_err());

        let request = LoginRequest { email: Some("a@b.c".to_string()), password: Some("pw".to_string()) };
        assert_eq!(request.into_credentials().unwrap(), ("a@b.c".to_string(), "pw".to_string()));
    }
}
