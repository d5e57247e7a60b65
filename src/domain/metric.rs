// Metric domain model - one KPI card
use super::status::StatusTag;

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub title: String,
    /// Already formatted for display ("11,356", "$1.2M", "42%").
    pub value: String,
    pub goal: Option<String>,
    pub status: Option<StatusTag>,
}

impl Metric {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            goal: None,
            status: None,
        }
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = Some(goal.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<StatusTag>) -> Self {
        self.status = Some(status.into());
        self
    }
}
