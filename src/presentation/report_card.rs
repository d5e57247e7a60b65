// Report card renderer - goals progress chart plus summary table
use crate::domain::goal::GoalRow;
use crate::presentation::badge::render_badge;
use crate::presentation::figures::{goals_bar_spec, render_figure_div};
use crate::presentation::markup::html_escape;
use serde::Serialize;

pub const GOALS_CHART_ID: &str = "goals-progress";

/// Goals section. Rows keep the order they were given in, both in the chart
/// and in the table.
pub fn render_report_card(goals: &[GoalRow]) -> String {
    format!(
        r#"<section class="report">
    <h2>Organizational Report Card</h2>
    {chart}
    {table}
</section>"#,
        chart = render_figure_div(GOALS_CHART_ID, &goals_bar_spec(goals)),
        table = render_goals_table(goals),
    )
}

pub fn render_goals_table(goals: &[GoalRow]) -> String {
    let rows: String = goals
        .iter()
        .map(|goal| {
            format!(
                r#"
        <tr>
            <td>{name}</td>
            <td>{current}</td>
            <td>{percent}</td>
            <td>{status}</td>
        </tr>"#,
                name = html_escape(&goal.name),
                current = html_escape(&goal.current.to_string()),
                percent = html_escape(&goal.percent_label()),
                status = render_badge(&goal.status),
            )
        })
        .collect();

    format!(
        r#"<table class="report-card">
    <thead>
        <tr><th>Goal</th><th>Current</th><th>Progress</th><th>Status</th></tr>
    </thead>
    <tbody>{rows}
    </tbody>
</table>"#,
        rows = rows,
    )
}

/// One report-card row as exposed by the JSON endpoint
#[derive(Debug, Clone, Serialize)]
pub struct GoalSummary {
    pub name: String,
    pub current: String,
    pub percent: f64,
    pub status: String,
    pub recognized: bool,
    pub bar_color: &'static str,
}

impl From<&GoalRow> for GoalSummary {
    fn from(goal: &GoalRow) -> Self {
        Self {
            name: goal.name.clone(),
            current: goal.current.to_string(),
            percent: goal.percent,
            status: goal.status.to_string(),
            recognized: goal.status.known().is_some(),
            bar_color: goal.bar_color(),
        }
    }
}
