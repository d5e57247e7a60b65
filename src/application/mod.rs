// Application layer - Use cases over dashboard content
pub mod dashboard_service;
pub mod dashboard_source;
