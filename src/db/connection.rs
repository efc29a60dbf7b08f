use crate::config::Config;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::time::Duration;

pub type DbPool = DatabaseConnection;

pub async fn create_pool(config: &Config) -> Result<DbPool, anyhow::Error> {
    let mut options = ConnectOptions::new(config.database_url());
    options
        .max_connections(config.database.max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    log::info!(
        "Connected to {:?} database",
        db.get_database_backend()
    );

    super::create_schema(&db).await?;

    Ok(db)
}
