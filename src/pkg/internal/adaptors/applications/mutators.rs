use sqlx::PgConnection;

use crate::pkg::internal::adaptors::applications::spec::ApplicationEntry;
use crate::pkg::server::handlers::applications::{CreateApplicationInput, PatchApplicationInput};
use crate::prelude::Result;

pub struct ApplicationMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ApplicationMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ApplicationMutator { pool }
    }

    pub async fn create(&mut self, input: CreateApplicationInput) -> Result<ApplicationEntry> {
        let row = sqlx::query_as::<_, ApplicationEntry>(
            r#"
            INSERT INTO applications (company, position, status, date_applied, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, company, position, status, date_applied, notes, created_at
            "#,
        )
        .bind(&input.company)
        .bind(&input.position)
        .bind(input.status)
        .bind(input.date_applied)
        .bind(&input.notes)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    // Partial merge over whatever subset of fields the patch carries. The
    // caller must not pass an empty patch; the statement needs at least one
    // SET clause.
    pub async fn update(
        &mut self,
        id: i32,
        patch: PatchApplicationInput,
    ) -> Result<Option<ApplicationEntry>> {
        let mut clauses: Vec<String> = Vec::new();
        let mut param_count = 1;

        if patch.company.is_some() {
            param_count += 1;
            clauses.push(format!("company = ${}", param_count));
        }
        if patch.position.is_some() {
            param_count += 1;
            clauses.push(format!("position = ${}", param_count));
        }
        if patch.status.is_some() {
            param_count += 1;
            clauses.push(format!("status = ${}", param_count));
        }
        if patch.notes.is_some() {
            param_count += 1;
            clauses.push(format!("notes = ${}", param_count));
        }

        let query = format!(
            "UPDATE applications SET {} WHERE id = $1 RETURNING id, company, position, status, date_applied, notes, created_at",
            clauses.join(", ")
        );

        let mut q = sqlx::query_as::<_, ApplicationEntry>(&query).bind(id);

        if let Some(company) = patch.company {
            q = q.bind(company);
        }
        if let Some(position) = patch.position {
            q = q.bind(position);
        }
        if let Some(status) = patch.status {
            q = q.bind(status);
        }
        if let Some(notes) = patch.notes {
            q = q.bind(notes);
        }
        let row = q.fetch_optional(&mut *self.pool).await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
