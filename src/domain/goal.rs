// Goal domain model - one row of the organizational report card
use super::error::ValidationError;
use super::status::StatusTag;
use std::fmt;

/// Progress toward a goal, either a count or pre-formatted text ("$640,000").
#[derive(Debug, Clone, PartialEq)]
pub enum Current {
    Number(f64),
    Text(String),
}

impl fmt::Display for Current {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Current::Number(value) => write!(f, "{}", value),
            Current::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Current {
    fn from(value: f64) -> Self {
        Current::Number(value)
    }
}

impl From<u32> for Current {
    fn from(value: u32) -> Self {
        Current::Number(f64::from(value))
    }
}

impl From<&str> for Current {
    fn from(text: &str) -> Self {
        Current::Text(text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalRow {
    pub name: String,
    pub current: Current,
    pub percent: f64,
    pub status: StatusTag,
}

impl GoalRow {
    /// Build a row, rejecting a percent outside [0, 100].
    pub fn new(
        name: impl Into<String>,
        current: impl Into<Current>,
        percent: f64,
        status: impl Into<StatusTag>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
            return Err(ValidationError::PercentOutOfRange {
                goal: name,
                percent,
            });
        }

        Ok(Self {
            name,
            current: current.into(),
            percent,
            status: status.into(),
        })
    }

    pub fn percent_label(&self) -> String {
        format!("{}%", self.percent)
    }

    pub fn bar_color(&self) -> &'static str {
        self.status.bar_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status::Status;

    #[test]
    fn test_recruitment_goal_formatting() {
        let row = GoalRow::new("Recruit 100,000 new members", 11356u32, 11.356, "On Track").unwrap();
        assert_eq!(row.current.to_string(), "11356");
        assert_eq!(row.percent_label(), "11.356%");
        assert_eq!(row.status, StatusTag::Known(Status::OnTrack));
    }

    #[test]
    fn test_text_current() {
        let row = GoalRow::new("Raise $2M", "$640,000", 32.0, "At Risk").unwrap();
        assert_eq!(row.current.to_string(), "$640,000");
    }

    #[test]
    fn test_percent_bounds_are_inclusive() {
        assert!(GoalRow::new("zero", 0u32, 0.0, "Off Track").is_ok());
        assert!(GoalRow::new("full", 10u32, 100.0, "Achieved").is_ok());
    }

    #[test]
    fn test_percent_out_of_range() {
        let err = GoalRow::new("over", 1u32, 100.5, "On Track").unwrap_err();
        assert_eq!(
            err,
            ValidationError::PercentOutOfRange {
                goal: "over".to_string(),
                percent: 100.5
            }
        );
        assert!(GoalRow::new("under", 1u32, -1.0, "On Track").is_err());
        assert!(GoalRow::new("nan", 1u32, f64::NAN, "On Track").is_err());
    }

    #[test]
    fn test_bar_color_follows_status() {
        let green = GoalRow::new("a", 1u32, 10.0, "On Track").unwrap();
        let amber = GoalRow::new("b", 1u32, 10.0, "At Risk").unwrap();
        let red = GoalRow::new("c", 1u32, 10.0, "Stalled").unwrap();
        assert_eq!(green.bar_color(), "#28a745");
        assert_eq!(amber.bar_color(), "#ffc107");
        assert_eq!(red.bar_color(), "#dc3545");
    }
}
