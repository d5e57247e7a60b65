// Application state for HTTP handlers
use crate::domain::dashboard::Dashboard;
use crate::infrastructure::logo::LogoAsset;
use crate::presentation::theme::Theme;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Dashboard,
    pub theme: Theme,
    pub logo: Option<LogoAsset>,
}
