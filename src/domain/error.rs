// Validation errors raised while assembling dashboard content
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("goal '{goal}' has percent {percent}, expected a value in [0, 100]")]
    PercentOutOfRange { goal: String, percent: f64 },

    #[error("chart '{chart}' has {labels} labels but {values} values")]
    MismatchedSeries {
        chart: String,
        labels: usize,
        values: usize,
    },

    #[error("gauge '{title}' is invalid: {reason}")]
    InvalidGauge { title: String, reason: String },

    #[error("{field} must be a hex colour like #1f3a93, got '{value}'")]
    InvalidColor { field: String, value: String },
}
