// Dashboard domain model
use super::chart::Figure;
use super::goal::GoalRow;
use super::metric::Metric;
use chrono::NaiveDate;

/// One block inside a tab, laid out top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    /// A row of KPI cards, one column each.
    Metrics(Vec<Metric>),
    /// Figures shown side by side.
    Figures(Vec<Figure>),
    Note { heading: String, body: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub id: String,
    pub title: String,
    pub panels: Vec<Panel>,
}

impl Tab {
    pub fn new(id: impl Into<String>, title: impl Into<String>, panels: Vec<Panel>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            panels,
        }
    }

    pub fn metrics(&self) -> impl Iterator<Item = &Metric> {
        self.panels.iter().flat_map(|panel| match panel {
            Panel::Metrics(metrics) => metrics.as_slice(),
            _ => &[][..],
        })
    }

    pub fn figures(&self) -> impl Iterator<Item = &Figure> {
        self.panels.iter().flat_map(|panel| match panel {
            Panel::Figures(figures) => figures.as_slice(),
            _ => &[][..],
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub title: String,
    pub last_updated: NaiveDate,
    pub kpis: Vec<Metric>,
    pub goals: Vec<GoalRow>,
    pub tabs: Vec<Tab>,
}

impl Dashboard {
    pub fn new(
        title: String,
        last_updated: NaiveDate,
        kpis: Vec<Metric>,
        goals: Vec<GoalRow>,
        tabs: Vec<Tab>,
    ) -> Self {
        Self {
            title,
            last_updated,
            kpis,
            goals,
            tabs,
        }
    }

    /// Every metric on the page, header row first.
    pub fn all_metrics(&self) -> impl Iterator<Item = &Metric> {
        self.kpis.iter().chain(self.tabs.iter().flat_map(Tab::metrics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::ChartDataset;

    #[test]
    fn test_tab_iterators_skip_other_panels() {
        let tab = Tab::new(
            "impact",
            "Impact",
            vec![
                Panel::Metrics(vec![Metric::new("Wins", "4"), Metric::new("Reach", "1.2M")]),
                Panel::Note {
                    heading: "Context".to_string(),
                    body: "Quarterly".to_string(),
                },
                Panel::Figures(vec![Figure::Bar {
                    title: "Wins by state".to_string(),
                    data: ChartDataset::from_pairs(&[("OH", 2.0)]),
                    color: None,
                }]),
            ],
        );

        assert_eq!(tab.metrics().count(), 2);
        assert_eq!(tab.figures().map(Figure::title).collect::<Vec<_>>(), ["Wins by state"]);
    }

    #[test]
    fn test_all_metrics_starts_with_kpis() {
        let dashboard = Dashboard::new(
            "Dashboard".to_string(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            vec![Metric::new("Members", "10")],
            vec![],
            vec![Tab::new("t", "T", vec![Panel::Metrics(vec![Metric::new("Chapters", "3")])])],
        );

        let titles: Vec<_> = dashboard.all_metrics().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["Members", "Chapters"]);
    }
}
