use bson::doc;
use mongodb::{
    options::{ClientOptions, Credential, ResolverConfig},
    Client, Database,
};
use tracing::{error, info};

use crate::config::mongo_conf::MongoConfig;

/// Database used when neither the config nor the URI names one.
const FALLBACK_DATABASE: &str = "test";

/// Builds the single client shared by every repository and returns the
/// configured database handle.
pub async fn connect(config: &MongoConfig) -> Result<Database, mongodb::error::Error> {
    let mut client_options =
        ClientOptions::parse_with_resolver_config(&config.uri, ResolverConfig::cloudflare()).await?;
    client_options.app_name = Some("CampusBackend".to_string());
    client_options.max_pool_size = Some(config.pool_size);
    client_options.connect_timeout = Some(std::time::Duration::from_secs(config.connection_timeout_secs));
    if let (Some(ref username), Some(ref password)) = (&config.username, &config.password) {
        client_options.credential = Some(
            Credential::builder()
                .username(username.clone())
                .password(password.clone())
                .build(),
        );
    }

    let database_name = config
        .database
        .clone()
        .or_else(|| client_options.default_database.clone())
        .unwrap_or_else(|| FALLBACK_DATABASE.to_string());

    let client = Client::with_options(client_options)?;
    info!(database = %database_name, "MongoDB client created");
    Ok(client.database(&database_name))
}

/// Round-trips a ping so a bad connection shows up in the logs at startup.
/// Failure is reported, not retried.
pub async fn ping(db: &Database) -> bool {
    match db.run_command(doc! { "ping": 1 }, None).await {
        Ok(_) => {
            info!("MongoDB connected successfully");
            true
        }
        Err(e) => {
            error!("MongoDB connection failed: {}", e);
            false
        }
    }
}
