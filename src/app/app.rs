use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::config::app_conf::AppConfig;
use crate::config::mongo_conf::MongoConfig;
use crate::repository::course_repo::{CourseRepository, MongoCourseRepository};
use crate::repository::mongo_client;
use crate::repository::unavailable_store::UnavailableStore;
use crate::repository::user_repo::{MongoUserRepository, UserRepository};
use crate::router::create_router;
use crate::service::account_service::{AccountService, AccountServiceImpl};
use crate::service::course_service::{CourseService, CourseServiceImpl};

pub struct App {
    config: AppConfig,
    router: Router,
    pub account_service: Arc<dyn AccountService>,
    pub course_service: Arc<dyn CourseService>,
}

impl App {
    /// Reads configuration from the environment. Only a configuration error
    /// fails here; database trouble never does.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let config = AppConfig::from_env();
        let mongo_config = MongoConfig::from_env()?;
        Ok(Self::with_config(config, &mongo_config).await)
    }

    /// Opens the one database handle for the process and wires every
    /// repository and service onto it. If no client can be built the error is
    /// logged and the stores answer every call with a connection error.
    pub async fn with_config(config: AppConfig, mongo_config: &MongoConfig) -> Self {
        let (user_repo, course_repo): (Arc<dyn UserRepository>, Arc<dyn CourseRepository>) =
            match mongo_client::connect(mongo_config).await {
                Ok(db) => {
                    let ping_db = db.clone();
                    tokio::spawn(async move {
                        if !mongo_client::ping(&ping_db).await {
                            warn!("Continuing without a confirmed database connection");
                        }
                    });
                    let users: Arc<dyn UserRepository> =
                        Arc::new(MongoUserRepository::new(&db, &mongo_config.user_collection));
                    let courses: Arc<dyn CourseRepository> =
                        Arc::new(MongoCourseRepository::new(&db, &mongo_config.course_collection));
                    (users, courses)
                }
                Err(e) => {
                    error!("MongoDB connection failed: {}", e);
                    let store = Arc::new(UnavailableStore::new(e.to_string()));
                    let users: Arc<dyn UserRepository> = store.clone();
                    let courses: Arc<dyn CourseRepository> = store;
                    (users, courses)
                }
            };

        let account_service: Arc<dyn AccountService> = Arc::new(AccountServiceImpl::new(user_repo));
        let course_service: Arc<dyn CourseService> = Arc::new(CourseServiceImpl::new(course_repo));

        let router = create_router(account_service.clone(), course_service.clone());
        App { config, router, account_service, course_service }
    }

    pub async fn start(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = self.config.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;
        info!("🚀 Server running on port {}", addr.port());
        self.serve(listener).await?;
        Ok(())
    }

    /// Serves the router on an already bound listener.
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        axum::serve(listener, self.router).await
    }
}
