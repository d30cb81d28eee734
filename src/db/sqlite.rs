use crate::db::models::HtmlSnapshot;
use crate::db::schema::SQLITE_INIT;
use crate::error::ReportError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;

pub type SqlitePool = Pool<Sqlite>;

/// Open the database (creating the file on first run) and prepare the schema.
pub async fn spawn(database_url: &str) -> Result<SnapshotStorage, ReportError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_opts)
        .await?;
    let storage = SnapshotStorage::new(pool);
    storage.init_schema().await?;
    Ok(storage)
}

#[derive(Clone)]
pub struct SnapshotStorage {
    pool: SqlitePool,
}

impl SnapshotStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ReportError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert or replace the snapshot for `date`.
    /// Uses SQLite `INSERT ... ON CONFLICT(date) DO UPDATE`.
    pub async fn upsert_snapshot(&self, date: &str, html: &str) -> Result<(), ReportError> {
        sqlx::query(
            r#"
            INSERT INTO html_data (date, html_content) VALUES (?, ?)
            ON CONFLICT(date) DO UPDATE SET
                html_content=excluded.html_content
            "#,
        )
        .bind(date)
        .bind(html)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Delete every snapshot dated strictly before `cutoff`.
    /// `YYYY-MM-DD` string order coincides with chronological order.
    /// Returns the number of rows purged.
    pub async fn delete_snapshots_older_than(&self, cutoff: &str) -> Result<u64, ReportError> {
        let result = sqlx::query("DELETE FROM html_data WHERE date < ?")
            .bind(cutoff)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn get_snapshot(&self, date: &str) -> Result<HtmlSnapshot, ReportError> {
        sqlx::query_as::<_, HtmlSnapshot>(
            "SELECT date, html_content FROM html_data WHERE date = ?",
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ReportError::SnapshotNotFound(date.to_string()))
    }

    pub async fn get_latest_snapshot(&self) -> Result<HtmlSnapshot, ReportError> {
        sqlx::query_as::<_, HtmlSnapshot>(
            "SELECT date, html_content FROM html_data ORDER BY date DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ReportError::NoSnapshots)
    }

    /// Increment the singleton counter and return the new value.
    /// One statement, so concurrent callers cannot lose updates.
    pub async fn increment_and_get_counter(&self) -> Result<i64, ReportError> {
        let rec: (i64,) = sqlx::query_as(
            "UPDATE endpoint_counter SET count = count + 1 WHERE id = 1 RETURNING count",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(rec.0)
    }
}
