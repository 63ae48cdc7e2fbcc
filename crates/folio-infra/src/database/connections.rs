use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

/// Configuration for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

/// Database handle established once at startup and shared by every request.
#[cfg(feature = "postgres")]
pub struct DatabaseConnections {
    pub main: DbConn,
}

#[cfg(feature = "postgres")]
impl DatabaseConnections {
    /// Connect and make sure the posts table exists.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!(
            "Database connected (pool: {}..{})",
            config.min_connections,
            config.max_connections
        );

        let connections = Self { main };
        connections.ensure_schema().await?;

        Ok(connections)
    }

    /// Create the posts table and its indexes if they are missing.
    async fn ensure_schema(&self) -> Result<(), DbErr> {
        use super::entity::post;

        let backend = self.main.get_database_backend();
        let schema = Schema::new(backend);

        let mut table = schema.create_table_from_entity(post::Entity);
        table.if_not_exists();
        self.main.execute(backend.build(&table)).await?;

        for mut index in schema.create_index_from_entity(post::Entity) {
            index.if_not_exists();
            self.main.execute(backend.build(&index)).await?;
        }

        tracing::debug!("Posts schema ready");
        Ok(())
    }
}
