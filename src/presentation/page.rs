// Page composer - header, KPI row, report card and the tab panels
use crate::domain::dashboard::{Dashboard, Panel, Tab};
use crate::presentation::cards::render_metric_row;
use crate::presentation::figures::{figure_spec, render_figure_div};
use crate::presentation::markup::html_escape;
use crate::presentation::report_card::render_report_card;
use crate::presentation::theme::Theme;

pub const LOGO_ROUTE: &str = "/logo";

pub fn render_page(dashboard: &Dashboard, theme: &Theme, has_logo: bool) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
    <script src="{plotly_src}"></script>
</head>
<body>
    <div class="container">
        {header}
        {kpis}
        {report}
        {tabs}
    </div>
    <script>{js}</script>
</body>
</html>"#,
        title = html_escape(&dashboard.title),
        css = theme.stylesheet(),
        plotly_src = html_escape(&theme.plotly_src),
        header = render_header(dashboard, has_logo),
        kpis = render_metric_row(&dashboard.kpis, theme),
        report = render_report_card(&dashboard.goals),
        tabs = render_tabs(&dashboard.tabs, theme),
        js = PAGE_JS,
    )
}

fn render_header(dashboard: &Dashboard, has_logo: bool) -> String {
    let logo = if has_logo {
        format!(r#"<img class="logo" src="{}" alt="logo">"#, LOGO_ROUTE)
    } else {
        String::new()
    };

    format!(
        r#"<header>
    {logo}
    <h1>{title}</h1>
    <div class="updated">Last updated: {updated}</div>
</header>"#,
        logo = logo,
        title = html_escape(&dashboard.title),
        updated = dashboard.last_updated.format("%B %-d, %Y"),
    )
}

fn render_tabs(tabs: &[Tab], theme: &Theme) -> String {
    let buttons: Vec<String> = tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            format!(
                r#"<button class="tab-btn{active}" data-tab="{id}">{title}</button>"#,
                active = if i == 0 { " active" } else { "" },
                id = html_escape(&tab.id),
                title = html_escape(&tab.title),
            )
        })
        .collect();

    let panels: Vec<String> = tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| render_tab_panel(tab, i == 0, theme))
        .collect();

    format!(
        r#"<nav class="tab-bar">
    {buttons}
</nav>
{panels}"#,
        buttons = buttons.join("\n    "),
        panels = panels.join("\n"),
    )
}

fn render_tab_panel(tab: &Tab, active: bool, theme: &Theme) -> String {
    let mut figure_index = 0;
    let body: Vec<String> = tab
        .panels
        .iter()
        .map(|panel| match panel {
            Panel::Metrics(metrics) => render_metric_row(metrics, theme),
            Panel::Figures(figures) => {
                let divs: Vec<String> = figures
                    .iter()
                    .map(|figure| {
                        figure_index += 1;
                        let id = format!("{}-chart-{}", tab.id, figure_index);
                        render_figure_div(&id, &figure_spec(figure, theme))
                    })
                    .collect();
                format!(r#"<div class="row">{}</div>"#, divs.join("\n"))
            }
            Panel::Note { heading, body } => format!(
                r#"<div class="row"><div class="note"><h3>{}</h3><p>{}</p></div></div>"#,
                html_escape(heading),
                html_escape(body)
            ),
        })
        .collect();

    format!(
        r#"<section class="tab-panel{active}" id="tab-{id}">
{body}
</section>"#,
        active = if active { " active" } else { "" },
        id = html_escape(&tab.id),
        body = body.join("\n"),
    )
}

const PAGE_JS: &str = r#"
function drawFigures(root) {
    if (typeof Plotly === 'undefined') return;
    root.querySelectorAll('[data-figure]').forEach(el => {
        if (el.dataset.drawn) return;
        const fig = JSON.parse(el.dataset.figure);
        Plotly.newPlot(el, fig.data, fig.layout, { responsive: true, displayModeBar: false });
        el.dataset.drawn = '1';
    });
}

document.querySelectorAll('.tab-btn').forEach(btn => {
    btn.addEventListener('click', () => {
        document.querySelectorAll('.tab-btn').forEach(b => b.classList.remove('active'));
        document.querySelectorAll('.tab-panel').forEach(p => p.classList.remove('active'));
        btn.classList.add('active');
        const panel = document.getElementById('tab-' + btn.dataset.tab);
        if (!panel) return;
        panel.classList.add('active');
        drawFigures(panel);
        panel.querySelectorAll('[data-drawn]').forEach(el => Plotly.Plots.resize(el));
    });
});

drawFigures(document.querySelector('.report'));
const firstPanel = document.querySelector('.tab-panel.active');
if (firstPanel) drawFigures(firstPanel);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{ChartDataset, Figure};
    use crate::domain::goal::GoalRow;
    use crate::domain::metric::Metric;
    use chrono::NaiveDate;

    fn dashboard() -> Dashboard {
        Dashboard::new(
            "Organizational Metrics Dashboard".to_string(),
            NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            vec![Metric::new("Total Members", "48,712")],
            vec![GoalRow::new("Recruit 100,000 new members", 11356u32, 11.356, "On Track").unwrap()],
            vec![
                Tab::new(
                    "organizing",
                    "Organizing",
                    vec![Panel::Figures(vec![
                        Figure::Bar {
                            title: "Campaigns".to_string(),
                            data: ChartDataset::from_pairs(&[("Retail", 5.0)]),
                            color: None,
                        },
                        Figure::Bar {
                            title: "Elections".to_string(),
                            data: ChartDataset::from_pairs(&[("Retail", 1.0)]),
                            color: None,
                        },
                    ])],
                ),
                Tab::new(
                    "recruitment",
                    "Recruitment & Engagement",
                    vec![Panel::Note {
                        heading: "Note".to_string(),
                        body: "Spring push <starts> soon".to_string(),
                    }],
                ),
            ],
        )
    }

    #[test]
    fn test_header() {
        let html = render_page(&dashboard(), &Theme::default(), false);
        assert!(html.contains("<h1>Organizational Metrics Dashboard</h1>"));
        assert!(html.contains("Last updated: March 3, 2025"));
        assert!(!html.contains(r#"class="logo""#));
    }

    #[test]
    fn test_logo_when_present() {
        let html = render_page(&dashboard(), &Theme::default(), true);
        assert!(html.contains(r#"<img class="logo" src="/logo" alt="logo">"#));
    }

    #[test]
    fn test_tabs_first_active() {
        let html = render_page(&dashboard(), &Theme::default(), false);
        assert!(html.contains(r#"<button class="tab-btn active" data-tab="organizing">Organizing</button>"#));
        assert!(html.contains(
            r#"<button class="tab-btn" data-tab="recruitment">Recruitment &amp; Engagement</button>"#
        ));
        assert!(html.contains(r#"<section class="tab-panel active" id="tab-organizing">"#));
        assert!(html.contains(r#"<section class="tab-panel" id="tab-recruitment">"#));
    }

    #[test]
    fn test_figure_ids_are_unique_per_tab() {
        let html = render_page(&dashboard(), &Theme::default(), false);
        assert!(html.contains(r#"id="organizing-chart-1""#));
        assert!(html.contains(r#"id="organizing-chart-2""#));
    }

    #[test]
    fn test_notes_are_escaped() {
        let html = render_page(&dashboard(), &Theme::default(), false);
        assert!(html.contains("Spring push &lt;starts&gt; soon"));
    }

    #[test]
    fn test_plotly_source_from_theme() {
        let theme = Theme {
            plotly_src: "/static/plotly.min.js".to_string(),
            ..Theme::default()
        };
        let html = render_page(&dashboard(), &theme, false);
        assert!(html.contains(r#"<script src="/static/plotly.min.js"></script>"#));
    }

    #[test]
    fn test_empty_dashboard_renders() {
        let empty = Dashboard::new(
            "Empty".to_string(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            vec![],
            vec![],
            vec![],
        );
        let html = render_page(&empty, &Theme::default(), false);
        assert!(html.contains("<h1>Empty</h1>"));
        assert!(html.contains(r#"id="goals-progress""#));
    }
}
