// Chart domain models - small literal datasets handed to the charting layer
use super::error::ValidationError;

/// Category labels paired with values. Both sides always have equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl ChartDataset {
    pub fn new(
        chart: &str,
        labels: Vec<String>,
        values: Vec<f64>,
    ) -> Result<Self, ValidationError> {
        if labels.len() != values.len() {
            return Err(ValidationError::MismatchedSeries {
                chart: chart.to_string(),
                labels: labels.len(),
                values: values.len(),
            });
        }
        Ok(Self { labels, values })
    }

    /// Convenience for inline literals.
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self {
            labels: pairs.iter().map(|(label, _)| label.to_string()).collect(),
            values: pairs.iter().map(|(_, value)| *value).collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: Option<String>,
    pub data: ChartDataset,
}

impl LineSeries {
    pub fn new(name: impl Into<String>, data: ChartDataset) -> Self {
        Self {
            name: name.into(),
            color: None,
            data,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GaugeBand {
    pub from: f64,
    pub to: f64,
    pub color: String,
}

impl GaugeBand {
    pub fn new(from: f64, to: f64, color: impl Into<String>) -> Self {
        Self {
            from,
            to,
            color: color.into(),
        }
    }
}

/// Dial with a needle value, a previous reading for the delta, a target
/// marker and three colour bands (low, mid, high).
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    pub title: String,
    pub value: f64,
    pub reference: f64,
    pub target: f64,
    pub max: f64,
    pub suffix: String,
    pub higher_is_better: bool,
    pub bands: [GaugeBand; 3],
}

impl Gauge {
    pub fn new(
        title: impl Into<String>,
        value: f64,
        reference: f64,
        target: f64,
        max: f64,
        bands: [GaugeBand; 3],
    ) -> Self {
        Self {
            title: title.into(),
            value,
            reference,
            target,
            max,
            suffix: String::new(),
            higher_is_better: true,
            bands,
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn lower_is_better(mut self) -> Self {
        self.higher_is_better = false;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let invalid = |reason: String| ValidationError::InvalidGauge {
            title: self.title.clone(),
            reason,
        };

        if !(self.max.is_finite() && self.max > 0.0) {
            return Err(invalid(format!("max must be positive, got {}", self.max)));
        }
        for (name, value) in [
            ("value", self.value),
            ("reference", self.reference),
            ("target", self.target),
        ] {
            if !value.is_finite() {
                return Err(invalid(format!("{} is not a finite number", name)));
            }
        }

        let [low, mid, high] = &self.bands;
        if low.from != 0.0 || high.to != self.max {
            return Err(invalid(format!(
                "bands must span 0..{}, got {}..{}",
                self.max, low.from, high.to
            )));
        }
        if low.to != mid.from || mid.to != high.from {
            return Err(invalid("bands must be contiguous".to_string()));
        }
        if self.bands.iter().any(|band| band.from > band.to) {
            return Err(invalid("band start exceeds its end".to_string()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Bar {
        title: String,
        data: ChartDataset,
        color: Option<String>,
    },
    Pie {
        title: String,
        data: ChartDataset,
        hole: f64,
    },
    Line {
        title: String,
        series: Vec<LineSeries>,
    },
    Gauge(Gauge),
}

impl Figure {
    pub fn title(&self) -> &str {
        match self {
            Figure::Bar { title, .. } | Figure::Pie { title, .. } | Figure::Line { title, .. } => {
                title
            }
            Figure::Gauge(gauge) => &gauge.title,
        }
    }

    /// Re-check invariants that inline literals bypass.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Figure::Bar { title, data, .. } | Figure::Pie { title, data, .. } => {
                check_dataset(title, data)
            }
            Figure::Line { title, series } => {
                for line in series {
                    check_dataset(&format!("{} / {}", title, line.name), &line.data)?;
                }
                // Every series of one chart shares the same x axis
                if let Some(first) = series.first() {
                    for line in &series[1..] {
                        if line.data.len() != first.data.len() {
                            return Err(ValidationError::MismatchedSeries {
                                chart: format!("{} / {}", title, line.name),
                                labels: first.data.len(),
                                values: line.data.len(),
                            });
                        }
                    }
                }
                Ok(())
            }
            Figure::Gauge(gauge) => gauge.validate(),
        }
    }
}

fn check_dataset(chart: &str, data: &ChartDataset) -> Result<(), ValidationError> {
    if data.labels.len() != data.values.len() {
        return Err(ValidationError::MismatchedSeries {
            chart: chart.to_string(),
            labels: data.labels.len(),
            values: data.values.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands() -> [GaugeBand; 3] {
        [
            GaugeBand::new(0.0, 50.0, "#f8d7da"),
            GaugeBand::new(50.0, 80.0, "#fff3cd"),
            GaugeBand::new(80.0, 100.0, "#d4edda"),
        ]
    }

    #[test]
    fn test_dataset_rejects_mismatched_lengths() {
        let err = ChartDataset::new(
            "Chapters",
            vec!["North".to_string(), "South".to_string()],
            vec![1.0],
        )
        .unwrap_err();

        assert_eq!(
            err,
            ValidationError::MismatchedSeries {
                chart: "Chapters".to_string(),
                labels: 2,
                values: 1
            }
        );
    }

    #[test]
    fn test_empty_dataset_is_valid() {
        let data = ChartDataset::new("empty", vec![], vec![]).unwrap();
        assert_eq!(data.len(), 0);
    }

    #[test]
    fn test_from_pairs_keeps_order() {
        let data = ChartDataset::from_pairs(&[("Jan", 3.0), ("Feb", 5.0)]);
        assert_eq!(data.labels(), ["Jan".to_string(), "Feb".to_string()]);
        assert_eq!(data.values(), [3.0, 5.0]);
    }

    #[test]
    fn test_gauge_validation() {
        let gauge = Gauge::new("Retention", 72.0, 65.0, 80.0, 100.0, bands());
        assert!(gauge.validate().is_ok());

        let mut gap = gauge.clone();
        gap.bands[1].from = 55.0;
        assert!(matches!(gap.validate(), Err(ValidationError::InvalidGauge { .. })));

        let mut short = gauge.clone();
        short.max = 120.0;
        assert!(short.validate().is_err());

        let mut nan = gauge;
        nan.value = f64::NAN;
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_line_series_must_share_axis() {
        let figure = Figure::Line {
            title: "Growth".to_string(),
            series: vec![
                LineSeries::new("a", ChartDataset::from_pairs(&[("Jan", 1.0), ("Feb", 2.0)])),
                LineSeries::new("b", ChartDataset::from_pairs(&[("Jan", 1.0)])),
            ],
        };
        assert!(figure.validate().is_err());
    }
}
