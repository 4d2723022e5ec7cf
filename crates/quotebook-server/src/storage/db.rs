//! SQLite quote store (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use quotebook_core::{NewQuote, Quote, QuoteError, QuoteId, QuoteStore};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;

/// Path sentinel for a database that lives only as long as the store.
pub const IN_MEMORY_PATH: &str = ":memory:";

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the database at `database_path` and ensure the
    /// `quotes` table exists. `:memory:` or an empty path opens an
    /// ephemeral database.
    pub async fn open(database_path: &str) -> Result<Self> {
        let pool = if database_path.is_empty() || database_path == IN_MEMORY_PATH {
            Self::connect_in_memory().await?
        } else {
            Self::connect_file(database_path).await?
        };

        tracing::info!("SQLite connection established, ensuring schema...");

        Self::ensure_schema(&pool)
            .await
            .context("Failed to create quotes table")?;

        Ok(Self { pool })
    }

    async fn connect_file(database_path: &str) -> Result<SqlitePool> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        if let Some(parent) = Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to SQLite database at: {}", database_path))
    }

    async fn connect_in_memory() -> Result<SqlitePool> {
        tracing::info!("Opening ephemeral in-memory SQLite database");

        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        // Every connection to `:memory:` is a separate database, so the pool
        // must hold exactly one connection and never recycle it.
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("Failed to open in-memory SQLite database")
    }

    async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS quotes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                author TEXT,
                quote TEXT
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

fn storage_error(err: sqlx::Error) -> QuoteError {
    tracing::error!("SQLite query failed: {}", err);
    QuoteError::Internal(err.to_string())
}

#[async_trait]
impl QuoteStore for SqliteStore {
    async fn create(&self, quote: NewQuote) -> quotebook_core::Result<QuoteId> {
        let result = sqlx::query(
            r#"
            INSERT INTO quotes (author, quote)
            VALUES (?1, ?2)
            "#,
        )
        .bind(&quote.author)
        .bind(&quote.text)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(result.last_insert_rowid())
    }

    /// Row order is whatever SQLite returns; callers must not rely on it.
    async fn get_all(&self) -> quotebook_core::Result<Vec<Quote>> {
        let rows: Vec<QuoteRow> = sqlx::query_as(
            r#"
            SELECT id, author, quote FROM quotes
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn get_random(&self) -> quotebook_core::Result<Quote> {
        let row: Option<QuoteRow> = sqlx::query_as(
            r#"
            SELECT id, author, quote FROM quotes
            ORDER BY RANDOM() LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.map(|r| r.into())
            .ok_or_else(|| QuoteError::NotFound("no quotes available".to_string()))
    }

    async fn filter_by_author(&self, author: &str) -> quotebook_core::Result<Vec<Quote>> {
        let rows: Vec<QuoteRow> = sqlx::query_as(
            r#"
            SELECT id, author, quote FROM quotes WHERE author = ?1
            "#,
        )
        .bind(author)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Deleting a missing id succeeds without touching anything.
    async fn delete(&self, id: QuoteId) -> quotebook_core::Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM quotes WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            tracing::debug!("Delete of quote {} matched no rows", id);
        }

        Ok(())
    }
}

// Helper struct for sqlx query_as; author/quote columns are nullable.
#[derive(sqlx::FromRow)]
struct QuoteRow {
    id: i64,
    author: Option<String>,
    quote: Option<String>,
}

impl From<QuoteRow> for Quote {
    fn from(r: QuoteRow) -> Self {
        Quote {
            id: r.id,
            author: r.author.unwrap_or_default(),
            text: r.quote.unwrap_or_default(),
        }
    }
}
