// Dashboard service - Use case for assembling and validating the dashboard
use crate::application::dashboard_source::DashboardSource;
use crate::domain::dashboard::Dashboard;
use crate::domain::error::ValidationError;
use crate::domain::status::StatusTag;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn DashboardSource>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn DashboardSource>) -> Self {
        Self { source }
    }

    /// Collect everything from the source and check it once. Any error here
    /// is a content mistake and should stop startup.
    pub fn load_dashboard(&self) -> Result<Dashboard, ValidationError> {
        let goals = self.source.goals()?;
        let tabs = self.source.tabs()?;

        for figure in tabs.iter().flat_map(|tab| tab.figures()) {
            figure.validate()?;
            tracing::debug!("Validated figure '{}'", figure.title());
        }

        let dashboard = Dashboard::new(
            self.source.title(),
            self.source.last_updated(),
            self.source.headline_metrics(),
            goals,
            tabs,
        );

        let unclassified = warn_unclassified(&dashboard);
        tracing::info!(
            "Loaded dashboard '{}': {} KPIs, {} goals, {} tabs, {} unclassified statuses",
            dashboard.title,
            dashboard.kpis.len(),
            dashboard.goals.len(),
            dashboard.tabs.len(),
            unclassified
        );

        Ok(dashboard)
    }
}

/// Unrecognised status text still renders as-is, but likely hides a typo.
fn warn_unclassified(dashboard: &Dashboard) -> usize {
    let goal_statuses = dashboard
        .goals
        .iter()
        .map(|goal| (goal.name.as_str(), &goal.status));
    let metric_statuses = dashboard
        .all_metrics()
        .filter_map(|metric| metric.status.as_ref().map(|s| (metric.title.as_str(), s)));

    let mut count = 0;
    for (owner, status) in goal_statuses.chain(metric_statuses) {
        if let StatusTag::Other(raw) = status {
            tracing::warn!("Unrecognised status '{}' on '{}', rendering as plain text", raw, owner);
            count += 1;
        }
    }
    count
}
