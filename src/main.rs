// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::embedded_source::EmbeddedSource;
use crate::infrastructure::logo::load_logo;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard_page, health_check, list_goals, logo};
use crate::presentation::page::LOGO_ROUTE;
use crate::presentation::theme::Theme;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let app_config = load_app_config().context("invalid dashboard configuration")?;
    let theme = Theme::from_branding(&app_config.branding);
    let logo_asset = load_logo(&app_config.branding.logo_path);

    // Assemble and validate content once; bad literals stop startup
    let service = DashboardService::new(Arc::new(EmbeddedSource::new()));
    let dashboard = service
        .load_dashboard()
        .context("invalid dashboard content")?;

    let state = Arc::new(AppState {
        dashboard,
        theme,
        logo: logo_asset,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(dashboard_page))
        .route("/healthz", get(health_check))
        .route(LOGO_ROUTE, get(logo))
        .route("/api/goals", get(list_goals))
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = app_config
        .server
        .bind
        .parse()
        .with_context(|| format!("invalid server.bind '{}'", app_config.server.bind))?;
    tracing::info!("Starting org-metrics-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
