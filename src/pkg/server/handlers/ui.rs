use askama::Template;
use axum::{extract::State, response::Html};

use crate::{
    pkg::server::{
        handlers::applications::fetch_all,
        state::AppState,
        uispec::{DashboardMetrics, Home},
    },
    prelude::Result,
};

pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    // Same masking as the json list: a storage fault renders as "no
    // applications", not as an error page.
    let applications = match fetch_all(&state).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("dashboard fetch failed, rendering empty: {}", e);
            Vec::new()
        }
    };
    let metrics = DashboardMetrics::from_entries(&applications);
    let template = Home {
        applications,
        metrics,
    };
    Ok(Html(template.render()?))
}
