use serde::{Deserialize, Serialize};

/// The four mutually exclusive dashboard panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Empty,
    Weather,
    Chart,
    PowerBi,
}

impl View {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Weather => "weather",
            Self::Chart => "chart",
            Self::PowerBi => "powerbi",
        }
    }

    /// Maps the navigation shortcut to its panel.
    pub const fn from_shortcut(key: char) -> Option<Self> {
        match key {
            '1' => Some(Self::Weather),
            '2' => Some(Self::Chart),
            '3' => Some(Self::PowerBi),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Weather => "Live Weather",
            Self::Chart => "Risk Chart",
            Self::PowerBi => "Power BI Report",
        }
    }

    /// The request owed to this view when it becomes active.
    pub const fn fetch_request(self) -> Option<FetchRequest> {
        match self {
            Self::Weather => Some(FetchRequest::Weather),
            Self::Chart => Some(FetchRequest::Stats),
            Self::Empty | Self::PowerBi => None,
        }
    }

    /// Navigable panels in button order. `Empty` is only the start state.
    pub const fn navigable() -> [Self; 3] {
        [Self::Weather, Self::Chart, Self::PowerBi]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRequest {
    Weather,
    Stats,
}

impl FetchRequest {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Stats => "stats",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Pie,
    Bar,
    Line,
}

impl ChartKind {
    pub const ALL: [Self; 3] = [Self::Pie, Self::Bar, Self::Line];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pie => "pie",
            Self::Bar => "bar",
            Self::Line => "line",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Pie => 0,
            Self::Bar => 1,
            Self::Line => 2,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Pie),
            1 => Some(Self::Bar),
            2 => Some(Self::Line),
            _ => None,
        }
    }

    pub const fn from_shortcut(key: char) -> Option<Self> {
        match key {
            'p' => Some(Self::Pie),
            'b' => Some(Self::Bar),
            'l' => Some(Self::Line),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pie => "Pie Chart",
            Self::Bar => "Bar Chart",
            Self::Line => "Line Chart",
        }
    }
}

/// Categorical risk label carried by each weather row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    High,
    Low,
    Other(String),
}

impl RiskLevel {
    pub const HIGH_LABEL: &'static str = "High Risk";
    pub const LOW_LABEL: &'static str = "Low Risk";

    pub fn as_str(&self) -> &str {
        match self {
            Self::High => Self::HIGH_LABEL,
            Self::Low => Self::LOW_LABEL,
            Self::Other(label) => label,
        }
    }

    pub const fn is_high(&self) -> bool {
        matches!(self, Self::High)
    }
}

impl From<String> for RiskLevel {
    // Exact match only: "high risk" is not the flagged label.
    fn from(value: String) -> Self {
        match value.as_str() {
            Self::HIGH_LABEL => Self::High,
            Self::LOW_LABEL => Self::Low,
            _ => Self::Other(value),
        }
    }
}

impl From<RiskLevel> for String {
    fn from(value: RiskLevel) -> Self {
        match value {
            RiskLevel::Other(label) => label,
            other => other.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRow {
    pub city: String,
    pub timestamp: String,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub cloudiness: f64,
    pub risk_level: RiskLevel,
    pub prediction_score: f64,
}

/// One category of the risk statistics, in response order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatEntry {
    pub name: String,
    pub value: f64,
}

impl StatEntry {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Formats a number the way the dashboard displays it: integral values
/// without a fractional part, everything else as-is.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_round_trips_unknown_labels() {
        let level: RiskLevel =
            serde_json::from_str("\"Moderate Risk\"").unwrap_or(RiskLevel::Low);
        assert_eq!(level, RiskLevel::Other("Moderate Risk".to_string()));
        assert_eq!(String::from(level), "Moderate Risk");
    }

    #[test]
    fn only_exact_high_label_is_flagged() {
        assert!(RiskLevel::from("High Risk".to_string()).is_high());
        assert!(!RiskLevel::from("high risk".to_string()).is_high());
        assert!(!RiskLevel::from("Low Risk".to_string()).is_high());
    }

    #[test]
    fn weather_row_decodes_from_endpoint_shape() -> Result<(), Box<dyn std::error::Error>> {
        let body = r#"{
            "city": "Pune",
            "timestamp": "2025-04-21T10:30:00Z",
            "temperature": 31.5,
            "humidity": 88,
            "pressure": 1002,
            "wind_speed": 4.2,
            "cloudiness": 90,
            "risk_level": "High Risk",
            "prediction_score": 1
        }"#;

        let row: WeatherRow = serde_json::from_str(body)?;
        assert_eq!(row.city, "Pune");
        assert!(row.risk_level.is_high());
        assert!((row.humidity - 88.0).abs() < f64::EPSILON);

        Ok(())
    }

    #[test]
    fn only_weather_and_chart_owe_a_fetch() {
        assert_eq!(View::Weather.fetch_request(), Some(FetchRequest::Weather));
        assert_eq!(View::Chart.fetch_request(), Some(FetchRequest::Stats));
        assert_eq!(View::PowerBi.fetch_request(), None);
        assert_eq!(View::Empty.fetch_request(), None);
    }

    #[test]
    fn numbers_render_without_trailing_zero_fraction() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(21.5), "21.5");
        assert_eq!(format_number(-4.0), "-4");
    }
}
