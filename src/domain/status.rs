// Status domain model - goal progress classification and its display table
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    OnTrack,
    AtRisk,
    OffTrack,
    Achieved,
}

/// Visual treatment for one status. Badges and chart bars both read from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub label: &'static str,
    pub class: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub bar: &'static str,
}

/// Bar colour for anything that is not a recognised status.
pub const UNCLASSIFIED_BAR: &str = "#dc3545";

static STYLES: [(Status, StatusStyle); 4] = [
    (
        Status::OnTrack,
        StatusStyle {
            label: "On Track",
            class: "status-on-track",
            background: "#28a745",
            text: "white",
            bar: "#28a745",
        },
    ),
    (
        Status::AtRisk,
        StatusStyle {
            label: "At Risk",
            class: "status-at-risk",
            background: "#ffc107",
            text: "black",
            bar: "#ffc107",
        },
    ),
    (
        Status::OffTrack,
        StatusStyle {
            label: "Off Track",
            class: "status-off-track",
            background: "#dc3545",
            text: "white",
            bar: "#dc3545",
        },
    ),
    (
        Status::Achieved,
        StatusStyle {
            label: "Achieved",
            class: "status-achieved",
            background: "#00c851",
            text: "white",
            bar: "#00c851",
        },
    ),
];

impl Status {
    pub const ALL: [Status; 4] = [
        Status::OnTrack,
        Status::AtRisk,
        Status::OffTrack,
        Status::Achieved,
    ];

    /// Exact, case-sensitive match against the display labels.
    pub fn parse(raw: &str) -> Option<Status> {
        STYLES
            .iter()
            .find(|(_, style)| style.label == raw)
            .map(|(status, _)| *status)
    }

    pub fn style(self) -> &'static StatusStyle {
        // STYLES is indexed in declaration order of the enum
        &STYLES[self as usize].1
    }

    pub fn label(self) -> &'static str {
        self.style().label
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A status as authored in the data: either one of the known values or raw
/// text that is shown as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusTag {
    Known(Status),
    Other(String),
}

impl StatusTag {
    pub fn known(&self) -> Option<Status> {
        match self {
            StatusTag::Known(status) => Some(*status),
            StatusTag::Other(_) => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            StatusTag::Known(status) => status.label(),
            StatusTag::Other(raw) => raw,
        }
    }

    pub fn bar_color(&self) -> &'static str {
        self.known()
            .map(|status| status.style().bar)
            .unwrap_or(UNCLASSIFIED_BAR)
    }
}

impl From<&str> for StatusTag {
    fn from(raw: &str) -> Self {
        match Status::parse(raw) {
            Some(status) => StatusTag::Known(status),
            None => StatusTag::Other(raw.to_string()),
        }
    }
}

impl From<Status> for StatusTag {
    fn from(status: Status) -> Self {
        StatusTag::Known(status)
    }
}

impl fmt::Display for StatusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_labels() {
        assert_eq!(Status::parse("On Track"), Some(Status::OnTrack));
        assert_eq!(Status::parse("At Risk"), Some(Status::AtRisk));
        assert_eq!(Status::parse("Off Track"), Some(Status::OffTrack));
        assert_eq!(Status::parse("Achieved"), Some(Status::Achieved));
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(Status::parse("on track"), None);
        assert_eq!(Status::parse(" On Track"), None);
        assert_eq!(Status::parse("Unknown"), None);
    }

    #[test]
    fn test_style_table_matches_enum_order() {
        for (i, status) in Status::ALL.into_iter().enumerate() {
            assert_eq!(STYLES[i].0, status);
            assert_eq!(Status::parse(status.label()), Some(status));
        }
    }

    #[test]
    fn test_bar_colors() {
        assert_eq!(StatusTag::from("On Track").bar_color(), "#28a745");
        assert_eq!(StatusTag::from("At Risk").bar_color(), "#ffc107");
        assert_eq!(StatusTag::from("Off Track").bar_color(), "#dc3545");
        assert_eq!(StatusTag::from("Pending review").bar_color(), UNCLASSIFIED_BAR);
    }

    #[test]
    fn test_unrecognized_text_passes_through() {
        let tag = StatusTag::from("Unknown");
        assert_eq!(tag, StatusTag::Other("Unknown".to_string()));
        assert_eq!(tag.text(), "Unknown");
        assert_eq!(tag.to_string(), "Unknown");
    }

    #[test]
    fn test_badge_colors() {
        let at_risk = Status::AtRisk.style();
        assert_eq!(at_risk.background, "#ffc107");
        assert_eq!(at_risk.text, "black");
        assert_eq!(Status::Achieved.style().class, "status-achieved");
    }
}
