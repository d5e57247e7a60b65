// Theme - brand palette injected into every renderer
use crate::domain::status::Status;
use crate::infrastructure::config::{
    BrandingSettings, DEFAULT_PLOTLY_SRC, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR,
};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub muted: String,
    /// Delta colour when a gauge moves the right way
    pub improving: String,
    pub worsening: String,
    pub plotly_src: String,
}

impl Theme {
    pub fn from_branding(branding: &BrandingSettings) -> Self {
        Self {
            primary: branding.primary_color.clone(),
            secondary: branding.secondary_color.clone(),
            plotly_src: branding.plotly_src.clone(),
            ..Self::default()
        }
    }

    /// Colours cycled through for multi-series charts.
    pub fn series_colors(&self) -> [&str; 4] {
        [self.primary.as_str(), self.secondary.as_str(), "#16a085", "#8e44ad"]
    }

    pub fn stylesheet(&self) -> String {
        let mut css = String::with_capacity(BASE_CSS.len() + 512);
        let _ = writeln!(
            css,
            ":root {{ --primary: {}; --secondary: {}; --muted: {}; }}",
            self.primary, self.secondary, self.muted
        );
        css.push_str(BASE_CSS);
        for status in Status::ALL {
            let style = status.style();
            let _ = writeln!(
                css,
                ".{} {{ background: {}; color: {}; }}",
                style.class, style.background, style.text
            );
        }
        css
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary: DEFAULT_SECONDARY_COLOR.to_string(),
            muted: "#6c757d".to_string(),
            improving: "#28a745".to_string(),
            worsening: "#dc3545".to_string(),
            plotly_src: DEFAULT_PLOTLY_SRC.to_string(),
        }
    }
}

const BASE_CSS: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    color: #212529;
    background: #f5f6f8;
}
.container { max-width: 1400px; margin: 0 auto; padding: 1.5rem 2rem; }
header { text-align: center; margin-bottom: 1.5rem; }
header .logo { display: block; margin: 0 auto 0.75rem; max-height: 96px; }
header h1 { margin: 0; color: var(--primary); }
header .updated { color: var(--muted); font-size: 0.875rem; margin-top: 0.25rem; }
h2 { color: var(--primary); border-bottom: 3px solid var(--secondary); padding-bottom: 0.25rem; }
.row { display: flex; flex-wrap: wrap; gap: 1rem; margin-bottom: 1.25rem; }
.row > * { flex: 1 1 0; min-width: 220px; }
.metric-card {
    background: #ffffff;
    border-radius: 8px;
    border-top: 4px solid var(--secondary);
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);
    padding: 1rem 1.25rem;
}
.metric-title { font-variant: small-caps; color: var(--muted); font-size: 0.95rem; letter-spacing: 0.03em; }
.metric-value { font-size: 2rem; font-weight: 700; margin: 0.25rem 0; }
.metric-goal { color: var(--muted); font-size: 0.85rem; }
.metric-status { margin-top: 0.5rem; }
.status-badge { display: inline-block; padding: 0.15rem 0.6rem; border-radius: 12px; font-size: 0.8rem; font-weight: 600; }
.chart { background: #ffffff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12); min-height: 340px; }
.note { background: #ffffff; border-left: 4px solid var(--primary); padding: 0.75rem 1rem; border-radius: 4px; }
.note h3 { margin: 0 0 0.25rem; font-size: 1rem; }
table.report-card { width: 100%; border-collapse: collapse; background: #ffffff; }
table.report-card th, table.report-card td { padding: 0.6rem 0.8rem; border-bottom: 1px solid #dee2e6; text-align: left; }
table.report-card th { background: var(--primary); color: #ffffff; }
.tab-bar { display: flex; gap: 0.25rem; border-bottom: 2px solid #dee2e6; margin: 2rem 0 1rem; }
.tab-btn {
    background: none;
    border: none;
    padding: 0.6rem 1.1rem;
    font-size: 1rem;
    cursor: pointer;
    color: var(--muted);
    border-bottom: 3px solid transparent;
}
.tab-btn.active { color: var(--primary); border-bottom-color: var(--secondary); font-weight: 600; }
.tab-panel { display: none; }
.tab-panel.active { display: block; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_overrides_palette() {
        let branding = BrandingSettings {
            primary_color: "#000000".to_string(),
            secondary_color: "#ffffff".to_string(),
            logo_path: String::new(),
            plotly_src: "/static/plotly.js".to_string(),
        };
        let theme = Theme::from_branding(&branding);

        assert_eq!(theme.primary, "#000000");
        assert_eq!(theme.secondary, "#ffffff");
        assert_eq!(theme.plotly_src, "/static/plotly.js");
        assert_eq!(theme.muted, Theme::default().muted);
    }

    #[test]
    fn test_stylesheet_has_palette_and_status_rules() {
        let css = Theme::default().stylesheet();
        assert!(css.starts_with(":root { --primary: #1f3a93; --secondary: #f39c12;"));
        assert!(css.contains(".status-on-track { background: #28a745; color: white; }"));
        assert!(css.contains(".status-at-risk { background: #ffc107; color: black; }"));
        assert!(css.contains(".status-off-track { background: #dc3545; color: white; }"));
        assert!(css.contains(".status-achieved { background: #00c851; color: white; }"));
    }
}
