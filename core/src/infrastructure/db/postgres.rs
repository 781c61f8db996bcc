use anyhow::Context;
use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use crate::domain::common::DatabaseConfig;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    /// Connects and applies pending migrations before handing the
    /// connection out.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, anyhow::Error> {
        let url = format!(
            "postgres://{}:{}@{}:{}/{}",
            config.username, config.password, config.host, config.port, config.name
        );

        let db = Database::connect(&url)
            .await
            .context("failed to connect to postgres")?;

        MIGRATOR
            .run(db.get_postgres_connection_pool())
            .await
            .context("failed to run database migrations")?;

        info!("database ready at {}:{}/{}", config.host, config.port, config.name);

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
