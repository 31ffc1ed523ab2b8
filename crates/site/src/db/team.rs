//! Team members repository.

use sqlx::PgPool;

use logiflow_core::TeamMemberId;

use super::RepositoryError;
use crate::models::content::{NewTeamMember, TeamMember, TeamMemberChanges};

/// Repository for team member rows.
pub struct TeamMemberRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamMemberRepository<'a> {
    /// Create a new team member repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all team members, sorted ascending by `"order"` with
    /// insertion-order ties.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<TeamMember>, RepositoryError> {
        let rows = sqlx::query_as::<_, TeamMember>(
            r#"
            SELECT id, name, role, description, image_url, "order"
            FROM team_members
            ORDER BY "order" ASC, id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Create a new team member.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &NewTeamMember) -> Result<TeamMember, RepositoryError> {
        let row = sqlx::query_as::<_, TeamMember>(
            r#"
            INSERT INTO team_members (name, role, description, image_url, "order")
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, role, description, image_url, "order"
            "#,
        )
        .bind(&input.name)
        .bind(&input.role)
        .bind(&input.description)
        .bind(input.image_url.as_deref())
        .bind(input.order)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Merge the supplied fields into an existing team member.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: TeamMemberId,
        changes: &TeamMemberChanges,
    ) -> Result<Option<TeamMember>, RepositoryError> {
        let row = sqlx::query_as::<_, TeamMember>(
            r#"
            UPDATE team_members
            SET name = COALESCE($2, name),
                role = COALESCE($3, role),
                description = COALESCE($4, description),
                image_url = CASE WHEN $5 THEN $6 ELSE image_url END,
                "order" = COALESCE($7, "order")
            WHERE id = $1
            RETURNING id, name, role, description, image_url, "order"
            "#,
        )
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.role.as_deref())
        .bind(changes.description.as_deref())
        .bind(changes.image_url.is_some())
        .bind(changes.image_url.clone().flatten())
        .bind(changes.order)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Delete a team member. Idempotent: returns `false` if the id did not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: TeamMemberId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
