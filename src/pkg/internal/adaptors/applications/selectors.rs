use sqlx::PgConnection;

use crate::{pkg::internal::adaptors::applications::spec::ApplicationEntry, prelude::Result};

pub struct ApplicationSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ApplicationSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ApplicationSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<ApplicationEntry>> {
        let row = sqlx::query_as::<_, ApplicationEntry>(
            "SELECT id, company, position, status, date_applied, notes, created_at
             FROM applications WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    // Newest first; id breaks ties within a single timestamp.
    pub async fn get_all(&mut self) -> Result<Vec<ApplicationEntry>> {
        let rows = sqlx::query_as::<_, ApplicationEntry>(
            "SELECT id, company, position, status, date_applied, notes, created_at
             FROM applications ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }
}
