use axum::extract::State;

use crate::{pkg::server::state::AppState, prelude::Result};

pub async fn livez() -> Result<()> {
    tracing::debug!("service is up");
    Ok(())
}

pub async fn healthz(State(state): State<AppState>) -> Result<()> {
    sqlx::query_scalar::<_, i32>("select 1")
        .fetch_one(&*state.db_pool)
        .await?;
    tracing::debug!("database reachable");
    Ok(())
}
