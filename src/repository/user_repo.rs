use crate::model::user::User;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use mongodb::{options::IndexOptions, Collection, Database, IndexModel};
use tracing::{error, info, warn};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: User) -> RepositoryResult<User>;
    async fn find(&self) -> RepositoryResult<Vec<User>>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
}

#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// Wraps the `users` collection and starts the unique `email` index build
    /// in the background. Must be called inside a tokio runtime.
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let repo = MongoUserRepository {
            collection: db.collection::<User>(collection_name),
        };
        let background = repo.clone();
        tokio::spawn(async move {
            // A failed index build is logged; the repository keeps working.
            let _ = background.ensure_email_index().await;
        });
        repo
    }

    pub async fn ensure_email_index(&self) -> RepositoryResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        match self.collection.create_index(index, None).await {
            Ok(_) => {
                info!("Unique email index ensured on {}", self.collection.name());
                Ok(())
            }
            Err(e) => {
                warn!("Failed to ensure unique email index on {}: {}", self.collection.name(), e);
                Err(RepositoryError::from(e))
            }
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[tracing::instrument(skip(self, user), fields(email = %user.email))]
    async fn insert(&self, mut user: User) -> RepositoryResult<User> {
        user.id = Some(ObjectId::new());
        match self.collection.insert_one(user.clone(), None).await {
            Ok(_) => {
                info!("User inserted");
                Ok(user)
            }
            Err(e) => {
                error!("Failed to insert user: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self) -> RepositoryResult<Vec<User>> {
        let mut cursor = self
            .collection
            .find(None, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list users: {}", e)))?;
        let mut users = Vec::new();
        while let Some(user) = cursor.next().await {
            match user {
                Ok(u) => users.push(u),
                Err(e) => {
                    error!("Failed to deserialize user: {}", e);
                    return Err(RepositoryError::serialization(format!("Failed to deserialize user: {}", e)));
                }
            }
        }
        Ok(users)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let filter = doc! { "email": email };
        let user = self
            .collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to find user by email: {}", e)))?;
        Ok(user)
    }
}
