use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{info, warn};
use serde::Serialize;
use std::fmt::Write as _;

use crate::api::{ApiError, DataSource};
use crate::app::alerts::high_risk_message;
use crate::domain::{format_number, StatEntry, WeatherRow};
use crate::ui::widgets::tables::format_timestamp;

/// One snapshot of both endpoints, as printed by `--headless`.
#[derive(Debug, Serialize)]
pub struct HeadlessReport {
    pub weather: Vec<WeatherRow>,
    pub stats: Vec<StatEntry>,
    pub alerts: Vec<String>,
}

pub async fn build_report(source: &dyn DataSource) -> Result<HeadlessReport, ApiError> {
    let weather = source.fetch_weather().await?;
    let stats = source.fetch_stats().await?;

    let alerts = weather
        .iter()
        .filter(|row| row.risk_level.is_high())
        .map(|row| high_risk_message(&row.city))
        .collect::<Vec<_>>();

    for alert in &alerts {
        warn!("{alert}");
    }

    Ok(HeadlessReport {
        weather,
        stats,
        alerts,
    })
}

pub fn format_report(report: &HeadlessReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\nLive Weather");
    let _ = writeln!(out, "============");
    if report.weather.is_empty() {
        let _ = writeln!(out, "(no rows)");
    }
    for row in &report.weather {
        let _ = writeln!(
            out,
            "- {} | {} | {} °C | {}% | {} hPa | {} m/s | {}% | {} | {}",
            row.city,
            format_timestamp(&row.timestamp),
            format_number(row.temperature),
            format_number(row.humidity),
            format_number(row.pressure),
            format_number(row.wind_speed),
            format_number(row.cloudiness),
            row.risk_level.as_str(),
            format_number(row.prediction_score),
        );
    }

    let _ = writeln!(out, "\nRisk Stats");
    let _ = writeln!(out, "==========");
    for entry in &report.stats {
        let _ = writeln!(out, "- {}: {}", entry.name, format_number(entry.value));
    }

    if !report.alerts.is_empty() {
        let _ = writeln!(out, "\nAlerts");
        let _ = writeln!(out, "======");
        for alert in &report.alerts {
            let _ = writeln!(out, "{alert}");
        }
    }

    out
}

/// Fetch both endpoints once, print them and exit
pub async fn run_headless(source: &dyn DataSource, json: bool) -> Result<()> {
    info!("Running headless snapshot");
    let report = build_report(source)
        .await
        .wrap_err("Failed to fetch dashboard data")?;

    if json {
        let json = serde_json::to_string_pretty(&report)?;
        println!("{json}");
    } else {
        print!("{}", format_report(&report));
    }

    Ok(())
}

pub async fn run_predict(source: &dyn DataSource, city: &str, json: bool) -> Result<()> {
    info!("Requesting prediction for {city}");
    let prediction = source
        .predict(city)
        .await
        .wrap_err_with(|| format!("Prediction for {city} failed"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        println!(
            "{}: {} (prediction {})",
            prediction.city, prediction.risk_level, prediction.probability
        );
    }

    Ok(())
}
