#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with the schema applied. Each call is isolated.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_in_memory().await?;
    models::db::migrate(&db).await?;
    Ok(db)
}
