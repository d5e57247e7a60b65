// Metric card renderer
use crate::domain::metric::Metric;
use crate::presentation::badge::render_badge;
use crate::presentation::markup::html_escape;
use crate::presentation::theme::Theme;

pub fn render_metric_card(metric: &Metric, theme: &Theme) -> String {
    let goal = metric
        .goal
        .as_deref()
        .map(|goal| format!(r#"<div class="metric-goal">Goal: {}</div>"#, html_escape(goal)))
        .unwrap_or_default();
    let status = metric
        .status
        .as_ref()
        .map(|status| format!(r#"<div class="metric-status">{}</div>"#, render_badge(status)))
        .unwrap_or_default();

    format!(
        r#"<div class="metric-card">
    <div class="metric-title">{title}</div>
    <div class="metric-value" style="color: {color}">{value}</div>
    {goal}{status}
</div>"#,
        title = html_escape(&metric.title),
        color = theme.primary,
        value = html_escape(&metric.value),
        goal = goal,
        status = status,
    )
}

pub fn render_metric_row(metrics: &[Metric], theme: &Theme) -> String {
    let cards: Vec<String> = metrics
        .iter()
        .map(|metric| render_metric_card(metric, theme))
        .collect();
    format!(r#"<div class="row">{}</div>"#, cards.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_card() {
        let metric = Metric::new("New Members (YTD)", "11,356")
            .with_goal("100,000")
            .with_status("On Track");
        let html = render_metric_card(&metric, &Theme::default());

        assert!(html.contains(r#"<div class="metric-title">New Members (YTD)</div>"#));
        assert!(html.contains(r#"style="color: #1f3a93">11,356</div>"#));
        assert!(html.contains(r#"<div class="metric-goal">Goal: 100,000</div>"#));
        assert!(html.contains("status-on-track"));
    }

    #[test]
    fn test_plain_card_omits_goal_and_status() {
        let html = render_metric_card(&Metric::new("Chapters", "34"), &Theme::default());
        assert!(!html.contains("metric-goal"));
        assert!(!html.contains("metric-status"));
    }

    #[test]
    fn test_card_uses_theme_primary() {
        let theme = Theme {
            primary: "#123456".to_string(),
            ..Theme::default()
        };
        let html = render_metric_card(&Metric::new("Raised", "$1M"), &theme);
        assert!(html.contains("color: #123456"));
    }

    #[test]
    fn test_row_keeps_order() {
        let metrics = vec![Metric::new("A", "1"), Metric::new("B", "2")];
        let html = render_metric_row(&metrics, &Theme::default());
        let a = html.find(">A<").unwrap();
        let b = html.find(">B<").unwrap();
        assert!(a < b);
    }
}
