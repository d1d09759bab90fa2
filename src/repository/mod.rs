pub mod admin_repo;
pub mod enquiry_repo;
pub mod gallery_repo;
pub mod owner_profile_repo;
pub mod package_repo;
pub mod repository_error;
pub mod review_repo;
pub mod transport_repo;

use mongodb::options::{ClientOptions, Credential};
use mongodb::{Client, Database};
use tracing::info;

use crate::config::mongo_conf::MongoConfig;

/// Open the shared database handle. Repositories borrow collections from
/// this handle; the connection pool lives for the whole process.
pub async fn connect(config: &MongoConfig) -> Result<Database, mongodb::error::Error> {
    let mut client_options = ClientOptions::parse(&config.uri).await?;
    client_options.app_name = Some("AaliyaBackend".to_string());
    client_options.max_pool_size = Some(config.pool_size);
    client_options.connect_timeout = Some(std::time::Duration::from_secs(
        config.connection_timeout_secs,
    ));

    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        client_options.credential = Some(
            Credential::builder()
                .username(username.clone())
                .password(password.clone())
                .build(),
        );
    }

    let client = Client::with_options(client_options)?;
    info!(database = %config.database, "Connected to MongoDB");
    Ok(client.database(&config.database))
}

/// RFC 3339 timestamp used for createdAt/updatedAt fields
pub(crate) fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
