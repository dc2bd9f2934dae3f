use mongodb::{bson::doc, options::ClientOptions, Client, Database};
use tracing::info;

use crate::config::MongoConfig;
use crate::utils::error::{AppError, AppResult};

/// Builds the pooled client and checks the server is reachable.
///
/// The client is returned alongside the database so the caller can shut it
/// down once the server stops.
pub async fn init_db(config: &MongoConfig) -> AppResult<(Client, Database)> {
    let mongo_url = config
        .url
        .as_deref()
        .ok_or_else(|| AppError::ConfigError("MONGO_URL must be set".to_string()))?;

    let mut client_options = ClientOptions::parse(mongo_url)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to parse MongoDB URI: {}", e)))?;

    client_options.app_name = Some("SwadeshiHindApi".to_string());
    client_options.max_pool_size = Some(config.max_pool_size);
    client_options.connect_timeout = Some(config.timeout);
    client_options.server_selection_timeout = Some(config.timeout);

    let client = Client::with_options(client_options).map_err(|e| {
        AppError::DatabaseError(format!("Failed to initialize MongoDB client: {}", e))
    })?;

    let database = client.database(&config.db_name);
    database.run_command(doc! { "ping": 1 }).await?;

    info!(db = %config.db_name, "connected to MongoDB");

    Ok((client, database))
}
