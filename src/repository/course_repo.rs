use crate::model::course::Course;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use mongodb::{Collection, Database};
use tracing::{error, info};

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find(&self) -> RepositoryResult<Vec<Course>>;
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Course>>;
    async fn insert(&self, course: Course) -> RepositoryResult<Course>;
    /// Removes the record and hands it back, `None` when nothing matched.
    async fn delete_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Course>>;
}

pub struct MongoCourseRepository {
    collection: Collection<Course>,
}

impl MongoCourseRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        MongoCourseRepository {
            collection: db.collection::<Course>(collection_name),
        }
    }
}

#[async_trait]
impl CourseRepository for MongoCourseRepository {
    #[tracing::instrument(skip(self))]
    async fn find(&self) -> RepositoryResult<Vec<Course>> {
        let cursor = self.collection.find(None, None).await;
        match cursor {
            Ok(mut cursor) => {
                let mut courses = Vec::new();
                while let Some(course) = cursor.next().await {
                    match course {
                        Ok(c) => courses.push(c),
                        Err(e) => {
                            error!("Failed to deserialize course: {}", e);
                            return Err(RepositoryError::serialization(format!("Failed to deserialize course: {}", e)));
                        }
                    }
                }
                info!("Fetched {} courses", courses.len());
                Ok(courses)
            }
            Err(e) => {
                error!("Failed to list courses: {}", e);
                Err(RepositoryError::database(format!("Failed to list courses: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Course>> {
        let filter = doc! { "_id": id };
        self.collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch course by ID: {}", e)))
    }

    #[tracing::instrument(skip(self), fields(title = %course.title))]
    async fn insert(&self, mut course: Course) -> RepositoryResult<Course> {
        course.id = Some(ObjectId::new());
        match self.collection.insert_one(course.clone(), None).await {
            Ok(_) => {
                info!("Course created successfully");
                Ok(course)
            }
            Err(e) => {
                error!("Failed to create course: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Course>> {
        let filter = doc! { "_id": id };
        match self.collection.find_one_and_delete(filter, None).await {
            Ok(Some(course)) => {
                info!("Course deleted successfully for ID: {}", id);
                Ok(Some(course))
            }
            Ok(None) => {
                info!("No course found to delete for ID: {}", id);
                Ok(None)
            }
            Err(e) => {
                error!("Failed to delete course: {}", e);
                Err(RepositoryError::database(format!("Failed to delete course: {}", e)))
            }
        }
    }
}
