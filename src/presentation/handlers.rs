// HTTP request handlers
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_page;
use crate::presentation::report_card::GoalSummary;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the whole dashboard page
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let html = render_page(&state.dashboard, &state.theme, state.logo.is_some());
    tracing::debug!("Rendered dashboard page: {} bytes", html.len());
    Html(html)
}

/// Serve the configured logo image
pub async fn logo(State(state): State<Arc<AppState>>) -> Response {
    match &state.logo {
        Some(logo) => (
            [
                (header::CONTENT_TYPE, logo.content_type),
                (header::CACHE_CONTROL, "public, max-age=86400"),
            ],
            logo.bytes.clone(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Report-card rows as JSON, in display order
pub async fn list_goals(State(state): State<Arc<AppState>>) -> Json<Vec<GoalSummary>> {
    Json(state.dashboard.goals.iter().map(GoalSummary::from).collect())
}
