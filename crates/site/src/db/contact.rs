//! Contact submissions repository.
//!
//! Submissions are immutable audit records: create and list only.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::content::{ContactSubmission, NewContactSubmission};

/// Repository for contact form submissions.
pub struct ContactSubmissionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContactSubmissionRepository<'a> {
    /// Create a new contact submission repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record a new submission.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        input: &NewContactSubmission,
    ) -> Result<ContactSubmission, RepositoryError> {
        let row = sqlx::query_as::<_, ContactSubmission>(
            r"
            INSERT INTO contact_submissions
                (first_name, last_name, email, company, service_interest, message)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, first_name, last_name, email, company, service_interest, message
            ",
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(input.company.as_deref())
        .bind(&input.service_interest)
        .bind(&input.message)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// List all submissions in the order they arrived.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<ContactSubmission>, RepositoryError> {
        let rows = sqlx::query_as::<_, ContactSubmission>(
            r"
            SELECT id, first_name, last_name, email, company, service_interest, message
            FROM contact_submissions
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
