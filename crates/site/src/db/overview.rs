//! Overview singleton repository.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::content::{NewOverview, OVERVIEW_ID, Overview};

/// Repository for the overview singleton row.
pub struct OverviewRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OverviewRepository<'a> {
    /// Create a new overview repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get the overview, if one has been published.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self) -> Result<Option<Overview>, RepositoryError> {
        let row = sqlx::query_as::<_, Overview>(
            r"
            SELECT id, title, description
            FROM overview
            LIMIT 1
            ",
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Insert or update the singleton row in a single statement.
    ///
    /// The primary key on the fixed id makes first-writer races safe: two
    /// concurrent upserts both land on the same row, last write wins.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn upsert(&self, input: &NewOverview) -> Result<Overview, RepositoryError> {
        let row = sqlx::query_as::<_, Overview>(
            r"
            INSERT INTO overview (id, title, description)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET title = EXCLUDED.title,
                description = EXCLUDED.description
            RETURNING id, title, description
            ",
        )
        .bind(OVERVIEW_ID)
        .bind(&input.title)
        .bind(&input.description)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }
}
