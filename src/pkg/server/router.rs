use axum::routing::post;
use axum::{
    Router,
    routing::{get, patch},
};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::handlers::ui::home;
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    let app = Router::new()
        .route("/", get(home))
        .route("/applications", post(handlers::applications::create))
        .route("/applications", get(handlers::applications::list))
        .route(
            "/applications/{id}",
            patch(handlers::applications::update).delete(handlers::applications::delete),
        )
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state);

    Ok(app)
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    // The pool is lazy, so the full router comes up with no database around.
    #[tokio::test]
    #[traced_test]
    async fn test_routes_build_without_database() -> Result<()> {
        build_routes().await?;
        Ok(())
    }
}
