use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend};
use tracing::info;

pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Open a pooled connection using the configured limits.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if let Some(schema) = cfg.schema.as_deref().filter(|_| !cfg.is_sqlite()) {
        opts.set_schema_search_path(schema.to_string());
    }
    let db = Database::connect(opts).await?;
    info!(event = "db_connected", backend = ?db.get_database_backend(), "database connection pool opened");
    Ok(db)
}

/// Single-connection in-memory SQLite database, used by tests and local runs.
/// Every pooled connection to `:memory:` is a separate database, so the pool is pinned to one.
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig {
        url: IN_MEMORY_URL.to_string(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    connect_with_config(&cfg).await
}

/// Create the configured Postgres schema if needed and apply pending migrations.
pub async fn prepare(db: &DatabaseConnection, cfg: &DatabaseConfig) -> anyhow::Result<()> {
    if let (DbBackend::Postgres, Some(schema)) = (db.get_database_backend(), cfg.schema.as_deref()) {
        let stmt = format!("CREATE SCHEMA IF NOT EXISTS \"{}\"", schema.replace('"', "\"\""));
        db.execute_unprepared(&stmt).await?;
    }
    migrate(db).await
}

pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
    migration::Migrator::up(db, None).await?;
    Ok(())
}
