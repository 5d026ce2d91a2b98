//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::store::{LinkStore, StoreError};

/// Name of the backing table.
pub const TABLE_NAME: &str = "links";

const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS links (
        hash     TEXT PRIMARY KEY,
        title    TEXT NOT NULL,
        original TEXT NOT NULL
    )
"#;

#[derive(Debug, FromRow)]
struct LinkRow {
    hash: String,
    title: String,
    original: String,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.hash, row.title, row.original)
    }
}

/// PostgreSQL store for link records.
///
/// Uses SQLx prepared statements with bound parameters.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn create(&self, link: Link) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO links (hash, title, original)
            VALUES ($1, $2, $3)
            ON CONFLICT (hash) DO UPDATE
            SET title = EXCLUDED.title, original = EXCLUDED.original
            "#,
        )
        .bind(&link.hash)
        .bind(&link.title)
        .bind(&link.original)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn fetch_by_hash(&self, hash: &str) -> Result<Link, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT hash, title, original
            FROM links
            WHERE hash = $1
            "#,
        )
        .bind(hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Link::from).ok_or_else(|| StoreError::NotFound {
            hash: hash.to_string(),
        })
    }

    async fn provision_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE_SQL)
            .execute(self.pool.as_ref())
            .await?;

        tracing::info!(table = TABLE_NAME, "Link table provisioned");
        Ok(())
    }
}
