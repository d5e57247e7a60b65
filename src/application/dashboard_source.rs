// Source trait for dashboard content
use crate::domain::dashboard::Tab;
use crate::domain::error::ValidationError;
use crate::domain::goal::GoalRow;
use crate::domain::metric::Metric;
use chrono::NaiveDate;

pub trait DashboardSource: Send + Sync {
    /// Page title shown in the header
    fn title(&self) -> String;

    /// Date printed as "Last updated" under the title
    fn last_updated(&self) -> NaiveDate;

    /// Top KPI row
    fn headline_metrics(&self) -> Vec<Metric>;

    /// Report-card rows in display order
    fn goals(&self) -> Result<Vec<GoalRow>, ValidationError>;

    /// Tab panels in display order
    fn tabs(&self) -> Result<Vec<Tab>, ValidationError>;
}
