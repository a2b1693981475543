use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EntryRow {
    pub id: String,
    pub author_id: String,
    pub body: String,
    pub created_at: String,
}

/// Read/write access to the `journal_entries` table.
///
/// The gamification core only ever reads `created_at` per author; writes come
/// from the entry-recording endpoint.
pub struct EntryStore {
    pool: SqlitePool,
}

impl EntryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn record_entry(&self, author_id: &str, body: &str) -> Result<EntryRow> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO journal_entries (id, author_id, body, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(author_id)
        .bind(body)
        .bind(&now)
        .execute(&self.pool)
        .await
        .context("insert journal entry")?;
        self.get_entry(&id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("entry not found after insert"))
    }

    pub async fn get_entry(&self, id: &str) -> Result<Option<EntryRow>> {
        Ok(sqlx::query_as("SELECT * FROM journal_entries WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    pub async fn count_entries(&self, author_id: &str) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM journal_entries WHERE author_id = ?")
                .bind(author_id)
                .fetch_one(&self.pool)
                .await
                .context("count journal entries")?;
        Ok(count)
    }

    /// All entry timestamps for an author, newest first.
    pub async fn entry_timestamps(&self, author_id: &str) -> Result<Vec<DateTime<Utc>>> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT created_at FROM journal_entries
              WHERE author_id = ?
           ORDER BY created_at DESC",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .context("load entry timestamps")?;

        rows.into_iter()
            .map(|(ts,)| {
                DateTime::parse_from_rfc3339(&ts)
                    .map(|t| t.with_timezone(&Utc))
                    .with_context(|| format!("malformed entry timestamp: {ts}"))
            })
            .collect()
    }
}
