//! Company values repository.
//!
//! Note the table name: `values` is reserved in SQL, so every statement
//! quotes it (as does the `"order"` column).

use sqlx::PgPool;

use logiflow_core::ValueId;

use super::RepositoryError;
use crate::models::content::{NewValue, Value, ValueChanges};

/// Repository for company value rows.
pub struct ValueRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ValueRepository<'a> {
    /// Create a new value repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all values, sorted for display.
    ///
    /// Sorted ascending by `"order"`; ties keep insertion order (serial ids).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Value>, RepositoryError> {
        let rows = sqlx::query_as::<_, Value>(
            r#"
            SELECT id, title, description, icon, "order"
            FROM "values"
            ORDER BY "order" ASC, id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Create a new value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &NewValue) -> Result<Value, RepositoryError> {
        let row = sqlx::query_as::<_, Value>(
            r#"
            INSERT INTO "values" (title, description, icon, "order")
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, icon, "order"
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.icon)
        .bind(input.order)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Merge the supplied fields into an existing value.
    ///
    /// Returns `None` if the id does not resolve. An empty change set
    /// returns the row unchanged.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: ValueId,
        changes: &ValueChanges,
    ) -> Result<Option<Value>, RepositoryError> {
        let row = sqlx::query_as::<_, Value>(
            r#"
            UPDATE "values"
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                icon = COALESCE($4, icon),
                "order" = COALESCE($5, "order")
            WHERE id = $1
            RETURNING id, title, description, icon, "order"
            "#,
        )
        .bind(id)
        .bind(changes.title.as_deref())
        .bind(changes.description.as_deref())
        .bind(changes.icon.as_deref())
        .bind(changes.order)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Delete a value. Idempotent: returns `false` if the id did not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ValueId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(r#"DELETE FROM "values" WHERE id = $1"#)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
