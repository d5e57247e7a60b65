// Infrastructure layer - Configuration, embedded content and assets
pub mod config;
pub mod embedded_source;
pub mod logo;
