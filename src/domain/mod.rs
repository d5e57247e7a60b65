// Domain layer - display-only value types
pub mod chart;
pub mod dashboard;
pub mod error;
pub mod goal;
pub mod metric;
pub mod status;
