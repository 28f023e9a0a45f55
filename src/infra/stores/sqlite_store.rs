use crate::domain::ports::CollectionStore;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Collections as rows of a single `collections(name, payload)` table.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionStore for SqliteStore {
    async fn read(&self, collection: &str) -> Result<Option<String>, AppError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT payload FROM collections WHERE name = ?")
                .bind(collection)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?;
        Ok(row.map(|(payload,)| payload))
    }

    async fn write(&self, collection: &str, payload: &str) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO collections (name, payload) VALUES (?, ?) \
             ON CONFLICT(name) DO UPDATE SET payload = excluded.payload",
        )
        .bind(collection)
        .bind(payload)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(())
    }

    async fn remove(&self, collection: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM collections WHERE name = ?")
            .bind(collection)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
