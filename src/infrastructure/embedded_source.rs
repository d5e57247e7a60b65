// Embedded dashboard content - the literal figures shown on the page
use crate::application::dashboard_source::DashboardSource;
use crate::domain::chart::{ChartDataset, Figure, Gauge, GaugeBand, LineSeries};
use crate::domain::dashboard::{Panel, Tab};
use crate::domain::error::ValidationError;
use crate::domain::goal::GoalRow;
use crate::domain::metric::Metric;
use crate::domain::status::Status;
use chrono::NaiveDate;

const MONTHS: [&str; 6] = ["Sep", "Oct", "Nov", "Dec", "Jan", "Feb"];

#[derive(Debug, Clone, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    pub fn new() -> Self {
        Self
    }
}

impl DashboardSource for EmbeddedSource {
    fn title(&self) -> String {
        "Organizational Metrics Dashboard".to_string()
    }

    fn last_updated(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap_or_default()
    }

    fn headline_metrics(&self) -> Vec<Metric> {
        vec![
            Metric::new("Total Members", "48,712"),
            Metric::new("New Members (YTD)", "11,356")
                .with_goal("100,000")
                .with_status(Status::OnTrack),
            Metric::new("Active Chapters", "34")
                .with_goal("50")
                .with_status(Status::OnTrack),
            Metric::new("Sustaining Revenue", "$640K")
                .with_goal("$2M")
                .with_status(Status::AtRisk),
        ]
    }

    fn goals(&self) -> Result<Vec<GoalRow>, ValidationError> {
        Ok(vec![
            GoalRow::new("Recruit 100,000 new members", 11356u32, 11.356, Status::OnTrack)?,
            GoalRow::new("Launch 25 new chapters", 9u32, 36.0, Status::OnTrack)?,
            GoalRow::new("Train 1,000 member organizers", 212u32, 21.2, Status::AtRisk)?,
            GoalRow::new("Raise $2M in sustaining donations", "$640,000", 32.0, Status::OnTrack)?,
            GoalRow::new("Win 10 first contracts", 2u32, 20.0, Status::OffTrack)?,
            GoalRow::new("Grow email list to 250,000", 187400u32, 74.96, Status::OnTrack)?,
            GoalRow::new("Keep staff retention above 90%", "94%", 100.0, Status::Achieved)?,
        ])
    }

    fn tabs(&self) -> Result<Vec<Tab>, ValidationError> {
        Ok(vec![
            organizing_tab(),
            recruitment_tab()?,
            development_tab(),
            marketing_tab()?,
            impact_tab(),
        ])
    }
}

fn monthly(chart: &str, values: &[f64]) -> Result<ChartDataset, ValidationError> {
    let labels = MONTHS.iter().map(|month| month.to_string()).collect();
    ChartDataset::new(chart, labels, values.to_vec())
}

fn three_bands(max: f64, low: f64, high: f64) -> [GaugeBand; 3] {
    [
        GaugeBand::new(0.0, low, "#f8d7da"),
        GaugeBand::new(low, high, "#fff3cd"),
        GaugeBand::new(high, max, "#d4edda"),
    ]
}

fn organizing_tab() -> Tab {
    Tab::new(
        "organizing",
        "Organizing",
        vec![
            Panel::Metrics(vec![
                Metric::new("Active Organizing Committees", "61"),
                Metric::new("Workplaces in Campaign", "27").with_status(Status::OnTrack),
                Metric::new("Elections Won", "4")
                    .with_goal("10")
                    .with_status(Status::AtRisk),
            ]),
            Panel::Figures(vec![
                Figure::Bar {
                    title: "Active Campaigns by Sector".to_string(),
                    data: ChartDataset::from_pairs(&[
                        ("Healthcare", 9.0),
                        ("Education", 7.0),
                        ("Retail", 5.0),
                        ("Logistics", 4.0),
                        ("Tech", 2.0),
                    ]),
                    color: None,
                },
                Figure::Gauge(
                    Gauge::new(
                        "Committee Member Retention",
                        72.0,
                        65.0,
                        80.0,
                        100.0,
                        three_bands(100.0, 50.0, 75.0),
                    )
                    .with_suffix("%"),
                ),
            ]),
            Panel::Note {
                heading: "Field notes".to_string(),
                body: "Two healthcare campaigns filed for elections in February. \
                       Committee retention improved after the winter leadership school."
                    .to_string(),
            },
        ],
    )
}

fn recruitment_tab() -> Result<Tab, ValidationError> {
    Ok(Tab::new(
        "recruitment",
        "Recruitment & Engagement",
        vec![
            Panel::Metrics(vec![
                Metric::new("New Members (YTD)", "11,356")
                    .with_goal("100,000")
                    .with_status(Status::OnTrack),
                Metric::new("Monthly Active Members", "18,240"),
                Metric::new("Event Attendance", "3,912").with_status(Status::AtRisk),
            ]),
            Panel::Figures(vec![
                Figure::Line {
                    title: "New Members per Month".to_string(),
                    series: vec![
                        LineSeries::new(
                            "New members",
                            monthly(
                                "New Members per Month",
                                &[1210.0, 1485.0, 1620.0, 1390.0, 2710.0, 2941.0],
                            )?,
                        ),
                        LineSeries::new(
                            "Monthly target",
                            monthly("New Members per Month", &[1800.0; 6])?,
                        )
                        .with_color("#95a5a6"),
                    ],
                },
                Figure::Pie {
                    title: "Engagement by Channel".to_string(),
                    data: ChartDataset::from_pairs(&[
                        ("Events", 38.0),
                        ("Phone banks", 21.0),
                        ("Online actions", 29.0),
                        ("Canvassing", 12.0),
                    ]),
                    hole: 0.4,
                },
            ]),
            Panel::Figures(vec![Figure::Gauge(
                Gauge::new(
                    "Event Show-up Rate",
                    58.0,
                    61.0,
                    70.0,
                    100.0,
                    three_bands(100.0, 40.0, 65.0),
                )
                .with_suffix("%"),
            )]),
        ],
    ))
}

fn development_tab() -> Tab {
    Tab::new(
        "development",
        "Development",
        vec![
            Panel::Metrics(vec![
                Metric::new("Total Raised (FY)", "$1.18M")
                    .with_goal("$2.5M")
                    .with_status(Status::AtRisk),
                Metric::new("Monthly Sustainers", "4,806").with_status(Status::OnTrack),
                Metric::new("Grant Pipeline", "$900K"),
            ]),
            Panel::Figures(vec![
                Figure::Bar {
                    title: "Revenue by Source ($K)".to_string(),
                    data: ChartDataset::from_pairs(&[
                        ("Dues", 412.0),
                        ("Sustainers", 228.0),
                        ("Major gifts", 310.0),
                        ("Grants", 175.0),
                        ("Events", 55.0),
                    ]),
                    color: None,
                },
                Figure::Gauge(
                    Gauge::new(
                        "Donor Churn",
                        6.5,
                        8.1,
                        5.0,
                        20.0,
                        [
                            GaugeBand::new(0.0, 5.0, "#d4edda"),
                            GaugeBand::new(5.0, 10.0, "#fff3cd"),
                            GaugeBand::new(10.0, 20.0, "#f8d7da"),
                        ],
                    )
                    .with_suffix("%")
                    .lower_is_better(),
                ),
            ]),
        ],
    )
}

fn marketing_tab() -> Result<Tab, ValidationError> {
    Ok(Tab::new(
        "marketing",
        "Marketing",
        vec![
            Panel::Metrics(vec![
                Metric::new("Email List", "187,400")
                    .with_goal("250,000")
                    .with_status(Status::OnTrack),
                Metric::new("Average Open Rate", "31%"),
                Metric::new("Social Followers", "92,300"),
            ]),
            Panel::Figures(vec![
                Figure::Line {
                    title: "Email List Growth".to_string(),
                    series: vec![LineSeries::new(
                        "Subscribers",
                        monthly(
                            "Email List Growth",
                            &[151200.0, 158900.0, 165300.0, 171800.0, 180100.0, 187400.0],
                        )?,
                    )],
                },
                Figure::Bar {
                    title: "Followers by Platform".to_string(),
                    data: ChartDataset::from_pairs(&[
                        ("Instagram", 34100.0),
                        ("TikTok", 27800.0),
                        ("Facebook", 18600.0),
                        ("X", 8200.0),
                        ("LinkedIn", 3600.0),
                    ]),
                    color: Some("#8e44ad".to_string()),
                },
            ]),
        ],
    ))
}

fn impact_tab() -> Tab {
    Tab::new(
        "impact",
        "Impact",
        vec![
            Panel::Metrics(vec![
                Metric::new("First Contracts Won", "2")
                    .with_goal("10")
                    .with_status(Status::OffTrack),
                Metric::new("Workers Covered", "6,420"),
                Metric::new("Policy Wins", "5").with_status(Status::Achieved),
            ]),
            Panel::Figures(vec![
                Figure::Pie {
                    title: "Workers Covered by Sector".to_string(),
                    data: ChartDataset::from_pairs(&[
                        ("Healthcare", 3100.0),
                        ("Education", 1850.0),
                        ("Retail", 940.0),
                        ("Logistics", 530.0),
                    ]),
                    hole: 0.0,
                },
                Figure::Gauge(
                    Gauge::new(
                        "Member Satisfaction",
                        8.1,
                        7.6,
                        8.5,
                        10.0,
                        three_bands(10.0, 5.0, 7.5),
                    )
                    .with_suffix("/10"),
                ),
            ]),
            Panel::Note {
                heading: "Wins this quarter".to_string(),
                body: "Paid sick leave ordinance passed in two counties; \
                       first contract ratified at Riverside Medical Center."
                    .to_string(),
            },
        ],
    )
}
