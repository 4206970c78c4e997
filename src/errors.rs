use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Mutation handlers fold their failures into the json result shape before this
// point; anything that still escapes is a server fault.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {}", &self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
