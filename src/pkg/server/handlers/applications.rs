use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    pkg::{
        internal::adaptors::applications::{
            mutators::ApplicationMutator,
            selectors::ApplicationSelector,
            spec::{ApplicationEntry, Status},
        },
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationInput {
    #[validate(length(min = 1, message = "company must not be empty"))]
    pub company: String,
    #[validate(length(min = 1, message = "position must not be empty"))]
    pub position: String,
    pub status: Status,
    pub date_applied: NaiveDate,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchApplicationInput {
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: Option<Status>,
    pub notes: Option<String>,
}

impl PatchApplicationInput {
    pub fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.position.is_none()
            && self.status.is_none()
            && self.notes.is_none()
    }
}

// Mutations never surface storage errors to the view; they come back as this
// shape with the raw cause logged server-side.
#[derive(Debug, Serialize)]
pub struct MutationOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<ApplicationEntry>,
}

impl MutationOutcome {
    fn done(application: Option<ApplicationEntry>) -> Self {
        MutationOutcome {
            success: true,
            error: None,
            application,
        }
    }

    fn failed(error: impl Into<String>) -> Self {
        MutationOutcome {
            success: false,
            error: Some(error.into()),
            application: None,
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateApplicationInput>,
) -> Json<MutationOutcome> {
    if let Err(errors) = input.validate() {
        return Json(MutationOutcome::failed(errors.to_string()));
    }
    match persist(&state, input).await {
        Ok(entry) => Json(MutationOutcome::done(Some(entry))),
        Err(e) => {
            tracing::error!("failed to save application: {}", e);
            Json(MutationOutcome::failed("failed to save application"))
        }
    }
}

async fn persist(state: &AppState, input: CreateApplicationInput) -> Result<ApplicationEntry> {
    let mut tx = state.db_pool.begin_txn().await?;
    let entry = ApplicationMutator::new(&mut tx).create(input).await?;
    tx.commit().await?;
    Ok(entry)
}

// Read faults are masked to an empty collection, never an error.
pub async fn list(State(state): State<AppState>) -> Json<Vec<ApplicationEntry>> {
    match fetch_all(&state).await {
        Ok(entries) => Json(entries),
        Err(e) => {
            tracing::error!("list fetch failed, returning empty set: {}", e);
            Json(Vec::new())
        }
    }
}

pub(in crate::pkg::server) async fn fetch_all(state: &AppState) -> Result<Vec<ApplicationEntry>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let entries = ApplicationSelector::new(&mut tx).get_all().await?;
    Ok(entries)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<PatchApplicationInput>,
) -> Json<MutationOutcome> {
    match apply_patch(&state, id, patch).await {
        Ok(Some(entry)) => Json(MutationOutcome::done(Some(entry))),
        Ok(None) => Json(MutationOutcome::failed("application not found")),
        Err(e) => {
            tracing::error!("failed to update application {}: {}", id, e);
            Json(MutationOutcome::failed("failed to update application"))
        }
    }
}

async fn apply_patch(
    state: &AppState,
    id: i32,
    patch: PatchApplicationInput,
) -> Result<Option<ApplicationEntry>> {
    let mut tx = state.db_pool.begin_txn().await?;
    // An empty patch is a no-op; hand back the stored record untouched.
    let row = if patch.is_empty() {
        ApplicationSelector::new(&mut tx).get_by_id(id).await?
    } else {
        ApplicationMutator::new(&mut tx).update(id, patch).await?
    };
    tx.commit().await?;
    Ok(row)
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Json<MutationOutcome> {
    match remove(&state, id).await {
        Ok(true) => Json(MutationOutcome::done(None)),
        Ok(false) => Json(MutationOutcome::failed("application not found")),
        Err(e) => {
            tracing::error!("failed to delete application {}: {}", id, e);
            Json(MutationOutcome::failed("failed to delete application"))
        }
    }
}

async fn remove(state: &AppState, id: i32) -> Result<bool> {
    let mut tx = state.db_pool.begin_txn().await?;
    let deleted = ApplicationMutator::new(&mut tx).delete(id).await?;
    tx.commit().await?;
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_outcome_shape() {
        let failed = serde_json::to_value(MutationOutcome::failed("failed to save application"))
            .unwrap();
        assert_eq!(failed["success"], false);
        assert_eq!(failed["error"], "failed to save application");
        assert!(failed.get("application").is_none());

        let done = serde_json::to_value(MutationOutcome::done(None)).unwrap();
        assert_eq!(done["success"], true);
        assert!(done.get("error").is_none());
    }

    #[test]
    fn test_create_input_defaults_notes() {
        let input: CreateApplicationInput = serde_json::from_str(
            r#"{"company":"Acme","position":"Engineer","status":"Pending","dateApplied":"2024-01-15"}"#,
        )
        .unwrap();
        assert_eq!(input.notes, "");
        assert_eq!(input.status, Status::Pending);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_create_input_rejects_empty_company() {
        let input: CreateApplicationInput = serde_json::from_str(
            r#"{"company":"","position":"Engineer","status":"Pending","dateApplied":"2024-01-15"}"#,
        )
        .unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(PatchApplicationInput::default().is_empty());
        let patch: PatchApplicationInput = serde_json::from_str(r#"{"status":"Offer"}"#).unwrap();
        assert!(!patch.is_empty());
    }
}
