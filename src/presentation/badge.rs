// Status badge renderer
use crate::domain::status::StatusTag;
use crate::presentation::markup::html_escape;

/// Known statuses get a styled pill; anything else is returned as plain
/// text with no styling.
pub fn render_badge(status: &StatusTag) -> String {
    match status {
        StatusTag::Known(known) => {
            let style = known.style();
            format!(
                r#"<span class="status-badge {}">{}</span>"#,
                style.class, style.label
            )
        }
        StatusTag::Other(raw) => html_escape(raw),
    }
}
