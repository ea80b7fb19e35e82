use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Icon stored when a course is created without one.
pub const DEFAULT_COURSE_ICON: &str = "📚";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub duration: f64,
    pub category: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub instructor: String,
}

fn default_icon() -> String {
    DEFAULT_COURSE_ICON.to_string()
}

/// Course data that already passed boundary validation.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub duration: f64,
    pub category: String,
    pub icon: Option<String>,
    pub instructor: String,
}

impl NewCourse {
    pub fn into_course(self) -> Course {
        let icon = self
            .icon
            .filter(|icon| !icon.is_empty())
            .unwrap_or_else(default_icon);
        Course {
            id: None,
            title: self.title,
            description: self.description,
            duration: self.duration,
            category: self.category,
            icon,
            instructor: self.instructor,
        }
    }
}
