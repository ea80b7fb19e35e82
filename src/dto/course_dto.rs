use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Number, Value};

use crate::model::course::{Course, NewCourse};
use crate::util::error::{messages, ServiceError};

/// Raw create-course body. Fields stay loosely typed so presence can be
/// judged before any value is cast.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    pub title: Option<Value>,
    pub description: Option<Value>,
    pub duration: Option<Value>,
    pub category: Option<Value>,
    pub icon: Option<Value>,
    pub instructor: Option<Value>,
}

impl CreateCourseRequest {
    /// Falsy required fields are a validation failure. Present values that
    /// cannot be cast are a store failure, as the document mapper rejects
    /// them at save time.
    pub fn into_new_course(self) -> Result<NewCourse, ServiceError> {
        let required = [&self.title, &self.description, &self.duration, &self.category, &self.instructor];
        if required.iter().any(|value| !is_truthy(value.as_ref())) {
            return Err(ServiceError::Validation(messages::COURSE_MISSING_FIELDS.to_string()));
        }

        let icon = match self.icon.as_ref().filter(|v| is_truthy(Some(*v))) {
            Some(value) => Some(cast_text("icon", value)?),
            None => None,
        };
        Ok(NewCourse {
            title: required_text("title", self.title.as_ref())?,
            description: required_text("description", self.description.as_ref())?,
            duration: required_number("duration", self.duration.as_ref())?,
            category: required_text("category", self.category.as_ref())?,
            icon,
            instructor: required_text("instructor", self.instructor.as_ref())?,
        })
    }
}

/// JS truthiness of a JSON value; absent counts as falsy.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn cast_error(path: &str, kind: &str, value: &Value) -> ServiceError {
    ServiceError::Store(format!("Cast to {} failed for value {} at path \"{}\"", kind, value, path))
}

fn required_text(path: &str, value: Option<&Value>) -> Result<String, ServiceError> {
    match value {
        Some(value) => cast_text(path, value),
        None => Err(ServiceError::Validation(messages::COURSE_MISSING_FIELDS.to_string())),
    }
}

fn required_number(path: &str, value: Option<&Value>) -> Result<f64, ServiceError> {
    match value {
        Some(value) => cast_number(path, value),
        None => Err(ServiceError::Validation(messages::COURSE_MISSING_FIELDS.to_string())),
    }
}

fn cast_text(path: &str, value: &Value) -> Result<String, ServiceError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(js_number_string(n)),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(cast_error(path, "String", value)),
    }
}

fn cast_number(path: &str, value: &Value) -> Result<f64, ServiceError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) if s.trim().is_empty() => Some(0.0),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number
        .filter(|n| n.is_finite())
        .ok_or_else(|| cast_error(path, "Number", value))
}

/// Formats a number the way JavaScript's `String(n)` does for everyday values.
fn js_number_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Whole numbers go out as integers, everything else as a float.
fn serialize_js_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Course as served over HTTP, with the identifier as a hex string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(serialize_with = "serialize_js_number")]
    pub duration: f64,
    pub category: String,
    pub icon: String,
    pub instructor: String,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        CourseResponse {
            id: course.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: course.title,
            description: course.description,
            duration: course.duration,
            category: course.category,
            icon: course.icon,
            instructor: course.instructor,
        }
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseResponse {
    pub message: String,
    pub newCourse: CourseResponse,
}
