// Figure specs - plotly.js JSON for every chart on the page
use crate::domain::chart::{Figure, Gauge};
use crate::domain::goal::GoalRow;
use crate::presentation::markup::html_escape;
use crate::presentation::theme::Theme;
use serde_json::{json, Value};

const THRESHOLD_COLOR: &str = "#dc3545";

pub fn figure_spec(figure: &Figure, theme: &Theme) -> Value {
    match figure {
        Figure::Bar { title, data, color } => {
            let color = color.as_deref().unwrap_or(&theme.primary);
            json!({
                "data": [{
                    "type": "bar",
                    "x": data.labels(),
                    "y": data.values(),
                    "marker": { "color": color },
                }],
                "layout": layout(title),
            })
        }
        Figure::Pie { title, data, hole } => json!({
            "data": [{
                "type": "pie",
                "labels": data.labels(),
                "values": data.values(),
                "hole": hole,
                "textinfo": "label+percent",
            }],
            "layout": layout(title),
        }),
        Figure::Line { title, series } => {
            let palette = theme.series_colors();
            let traces: Vec<Value> = series
                .iter()
                .enumerate()
                .map(|(i, line)| {
                    let color = line.color.as_deref().unwrap_or(palette[i % palette.len()]);
                    json!({
                        "type": "scatter",
                        "mode": "lines+markers",
                        "name": line.name,
                        "x": line.data.labels(),
                        "y": line.data.values(),
                        "line": { "color": color },
                    })
                })
                .collect();
            json!({ "data": traces, "layout": layout(title) })
        }
        Figure::Gauge(gauge) => gauge_spec(gauge, theme),
    }
}

fn gauge_spec(gauge: &Gauge, theme: &Theme) -> Value {
    let (up, down) = if gauge.higher_is_better {
        (&theme.improving, &theme.worsening)
    } else {
        (&theme.worsening, &theme.improving)
    };
    let steps: Vec<Value> = gauge
        .bands
        .iter()
        .map(|band| json!({ "range": [band.from, band.to], "color": band.color }))
        .collect();

    json!({
        "data": [{
            "type": "indicator",
            "mode": "gauge+number+delta",
            "value": gauge.value,
            "number": { "suffix": gauge.suffix },
            "title": { "text": gauge.title },
            "delta": {
                "reference": gauge.reference,
                "increasing": { "color": up },
                "decreasing": { "color": down },
            },
            "gauge": {
                "axis": { "range": [0.0, gauge.max] },
                "bar": { "color": theme.primary },
                "steps": steps,
                "threshold": {
                    "line": { "color": THRESHOLD_COLOR, "width": 4 },
                    "thickness": 0.75,
                    "value": gauge.target,
                },
            },
        }],
        "layout": { "margin": { "t": 60, "b": 20, "l": 30, "r": 30 } },
    })
}

/// Horizontal progress bars, one per goal, top to bottom in the given order.
pub fn goals_bar_spec(goals: &[GoalRow]) -> Value {
    let names: Vec<&str> = goals.iter().map(|goal| goal.name.as_str()).collect();
    let percents: Vec<f64> = goals.iter().map(|goal| goal.percent).collect();
    let colors: Vec<&str> = goals.iter().map(GoalRow::bar_color).collect();
    let hover: Vec<String> = goals.iter().map(goal_hover_text).collect();

    json!({
        "data": [{
            "type": "bar",
            "orientation": "h",
            "x": percents,
            "y": names,
            "marker": { "color": colors },
            "hovertext": hover,
            "hoverinfo": "text",
        }],
        "layout": {
            "title": { "text": "Progress Toward Organizational Goals" },
            "xaxis": { "range": [0, 100], "title": { "text": "% complete" } },
            "yaxis": { "autorange": "reversed", "automargin": true },
            "margin": { "t": 50, "b": 40, "l": 20, "r": 20 },
        },
    })
}

fn goal_hover_text(goal: &GoalRow) -> String {
    format!(
        "{}<br>Current: {}<br>Progress: {}<br>Status: {}",
        goal.name,
        goal.current,
        goal.percent_label(),
        goal.status
    )
}

fn layout(title: &str) -> Value {
    json!({
        "title": { "text": title },
        "margin": { "t": 50, "b": 40, "l": 40, "r": 20 },
    })
}

/// Placeholder element the page script turns into a plot.
pub fn render_figure_div(id: &str, spec: &Value) -> String {
    format!(
        r#"<div class="chart" id="{}" data-figure="{}"></div>"#,
        html_escape(id),
        html_escape(&spec.to_string())
    )
}
