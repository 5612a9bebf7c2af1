use crate::api::error::ApiError;
use crate::domain::{StatEntry, WeatherRow};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of the backend's per-city prediction route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub city: String,
    pub risk_level: String,
    pub probability: i64,
}

/// Remote collaborators the dashboard reads from.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_weather(&self) -> Result<Vec<WeatherRow>, ApiError>;
    async fn fetch_stats(&self) -> Result<Vec<StatEntry>, ApiError>;
    async fn predict(&self, city: &str) -> Result<Prediction, ApiError>;
}

/// Flattens the stats object into entries, keeping document key order.
///
/// Values must be numbers or numeric strings; anything else is rejected
/// rather than handed to the charts.
pub fn flatten_stats(body: Value) -> Result<Vec<StatEntry>, ApiError> {
    let Value::Object(map) = body else {
        return Err(ApiError::StatsShape(format!(
            "expected an object, got {}",
            value_kind(&body)
        )));
    };

    map.into_iter()
        .map(|(name, value)| {
            let number = match &value {
                Value::Number(number) => number.as_f64(),
                Value::String(text) => text.trim().parse::<f64>().ok(),
                _ => None,
            };

            number
                .map(|value| StatEntry::new(name.clone(), value))
                .ok_or_else(|| {
                    ApiError::StatsShape(format!(
                        "value for '{name}' is not numeric ({})",
                        value_kind(&value)
                    ))
                })
        })
        .collect()
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_keep_response_key_order() -> Result<(), Box<dyn std::error::Error>> {
        let body: Value = serde_json::from_str(r#"{"Low Risk": 7, "High Risk": 3}"#)?;
        let entries = flatten_stats(body)?;

        assert_eq!(
            entries,
            vec![StatEntry::new("Low Risk", 7.0), StatEntry::new("High Risk", 3.0)]
        );

        Ok(())
    }

    #[test]
    fn stats_accept_numeric_strings() -> Result<(), Box<dyn std::error::Error>> {
        let body: Value = serde_json::from_str(r#"{"High Risk": " 4 "}"#)?;
        let entries = flatten_stats(body)?;

        assert_eq!(entries, vec![StatEntry::new("High Risk", 4.0)]);

        Ok(())
    }

    #[test]
    fn stats_reject_non_objects() -> Result<(), Box<dyn std::error::Error>> {
        let body: Value = serde_json::from_str("[1, 2]")?;
        let error = flatten_stats(body).err().map(|e| e.to_string());

        assert_eq!(
            error.as_deref(),
            Some("Unexpected stats payload: expected an object, got array")
        );

        Ok(())
    }

    #[test]
    fn stats_reject_non_numeric_values() -> Result<(), Box<dyn std::error::Error>> {
        let body: Value = serde_json::from_str(r#"{"High Risk": true}"#)?;
        assert!(matches!(flatten_stats(body), Err(ApiError::StatsShape(_))));

        Ok(())
    }
}
