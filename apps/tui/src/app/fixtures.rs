// Shared test doubles for the app module

use crate::api::{ApiError, DataSource, Prediction};
use crate::domain::{RiskLevel, StatEntry, WeatherRow};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::oneshot;

type WeatherReply = Result<Vec<WeatherRow>, ApiError>;

pub fn row(city: &str, risk: &str) -> WeatherRow {
    WeatherRow {
        city: city.to_string(),
        timestamp: "2025-04-21T10:30:00Z".to_string(),
        temperature: 28.0,
        humidity: 80.0,
        pressure: 1005.0,
        wind_speed: 3.5,
        cloudiness: 75.0,
        risk_level: RiskLevel::from(risk.to_string()),
        prediction_score: 0.0,
    }
}

pub fn risk_stats() -> Vec<StatEntry> {
    vec![StatEntry::new("High Risk", 3.0), StatEntry::new("Low Risk", 7.0)]
}

/// In-process source: answers immediately, or waits on gates the test
/// resolves in whatever order it likes.
pub struct ScriptedSource {
    rows: Vec<WeatherRow>,
    gates: Option<Mutex<VecDeque<oneshot::Receiver<WeatherReply>>>>,
    weather_calls: AtomicUsize,
    stats_calls: AtomicUsize,
}

impl ScriptedSource {
    pub const fn ready(rows: Vec<WeatherRow>) -> Self {
        Self {
            rows,
            gates: None,
            weather_calls: AtomicUsize::new(0),
            stats_calls: AtomicUsize::new(0),
        }
    }

    pub fn gated() -> Self {
        Self {
            rows: Vec::new(),
            gates: Some(Mutex::new(VecDeque::new())),
            weather_calls: AtomicUsize::new(0),
            stats_calls: AtomicUsize::new(0),
        }
    }

    /// Queues a gate for the next weather call; calls take gates in order.
    pub fn gate_weather(&self) -> oneshot::Sender<WeatherReply> {
        let (sender, receiver) = oneshot::channel();
        if let Some(gates) = &self.gates {
            if let Ok(mut queue) = gates.lock() {
                queue.push_back(receiver);
            }
        }
        sender
    }

    pub fn weather_calls(&self) -> usize {
        self.weather_calls.load(Ordering::SeqCst)
    }

    pub fn stats_calls(&self) -> usize {
        self.stats_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataSource for ScriptedSource {
    async fn fetch_weather(&self) -> Result<Vec<WeatherRow>, ApiError> {
        self.weather_calls.fetch_add(1, Ordering::SeqCst);

        let gate = self
            .gates
            .as_ref()
            .and_then(|gates| gates.lock().ok().and_then(|mut queue| queue.pop_front()));

        match gate {
            Some(receiver) => receiver
                .await
                .unwrap_or_else(|_| Err(ApiError::StatsShape("gate dropped".to_string()))),
            None => Ok(self.rows.clone()),
        }
    }

    async fn fetch_stats(&self) -> Result<Vec<StatEntry>, ApiError> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        Ok(risk_stats())
    }

    async fn predict(&self, city: &str) -> Result<Prediction, ApiError> {
        Ok(Prediction {
            city: city.to_string(),
            risk_level: RiskLevel::LOW_LABEL.to_string(),
            probability: 0,
        })
    }
}
