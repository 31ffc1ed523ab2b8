//! Service offerings repository.

use sqlx::PgPool;

use logiflow_core::ServiceId;

use super::RepositoryError;
use crate::models::content::{NewService, Service, ServiceChanges};

/// Repository for service rows.
pub struct ServiceRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ServiceRepository<'a> {
    /// Create a new service repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all services, sorted ascending by `"order"` with insertion-order
    /// ties.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Service>, RepositoryError> {
        let rows = sqlx::query_as::<_, Service>(
            r#"
            SELECT id, title, description, image_url, icon, "order"
            FROM services
            ORDER BY "order" ASC, id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Create a new service.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &NewService) -> Result<Service, RepositoryError> {
        let row = sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (title, description, image_url, icon, "order")
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, image_url, icon, "order"
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.image_url.as_deref())
        .bind(&input.icon)
        .bind(input.order)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Merge the supplied fields into an existing service.
    ///
    /// `image_url` is only written when the field was supplied, so an
    /// explicit `null` clears it while an absent field keeps it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: ServiceId,
        changes: &ServiceChanges,
    ) -> Result<Option<Service>, RepositoryError> {
        let row = sqlx::query_as::<_, Service>(
            r#"
            UPDATE services
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                image_url = CASE WHEN $4 THEN $5 ELSE image_url END,
                icon = COALESCE($6, icon),
                "order" = COALESCE($7, "order")
            WHERE id = $1
            RETURNING id, title, description, image_url, icon, "order"
            "#,
        )
        .bind(id)
        .bind(changes.title.as_deref())
        .bind(changes.description.as_deref())
        .bind(changes.image_url.is_some())
        .bind(changes.image_url.clone().flatten())
        .bind(changes.icon.as_deref())
        .bind(changes.order)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Delete a service. Idempotent: returns `false` if the id did not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ServiceId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
