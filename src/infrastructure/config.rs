use crate::domain::error::ValidationError;
use serde::Deserialize;
use std::collections::HashMap;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_PRIMARY_COLOR: &str = "#1f3a93";
pub const DEFAULT_SECONDARY_COLOR: &str = "#f39c12";
pub const DEFAULT_LOGO_PATH: &str = "assets/logo.png";
pub const DEFAULT_PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub branding: BrandingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BrandingSettings {
    pub primary_color: String,
    pub secondary_color: String,
    /// Empty disables the logo
    pub logo_path: String,
    pub plotly_src: String,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("branding.primary_color", &self.branding.primary_color),
            ("branding.secondary_color", &self.branding.secondary_color),
        ] {
            if !is_hex_color(value) {
                return Err(ValidationError::InvalidColor {
                    field: field.to_string(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Defaults, then `config/dashboard.*` if present, then `DASHBOARD__*` env vars
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_layered(
        config::File::with_name("config/dashboard").required(false),
        None,
    )
}

/// `env` replaces the process environment when given
fn load_layered<S>(file: S, env: Option<HashMap<String, String>>) -> anyhow::Result<AppConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("server.bind", DEFAULT_BIND)?
        .set_default("branding.primary_color", DEFAULT_PRIMARY_COLOR)?
        .set_default("branding.secondary_color", DEFAULT_SECONDARY_COLOR)?
        .set_default("branding.logo_path", DEFAULT_LOGO_PATH)?
        .set_default("branding.plotly_src", DEFAULT_PLOTLY_SRC)?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .separator("__")
                .source(env),
        )
        .build()?;

    let app_config: AppConfig = settings.try_deserialize()?;
    app_config.validate()?;
    Ok(app_config)
}

/// `#rgb` or `#rrggbb`
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
