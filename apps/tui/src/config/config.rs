use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const ORIGIN_VAR: &str = "CLOUDBURST_ORIGIN";
pub const BACKEND_VAR: &str = "CLOUDBURST_BACKEND";
pub const REPORT_URL_VAR: &str = "CLOUDBURST_REPORT_URL";
pub const ALERT_MS_VAR: &str = "CLOUDBURST_ALERT_MS";
pub const TIMEOUT_SECS_VAR: &str = "CLOUDBURST_TIMEOUT_SECS";
pub const LOG_FILE_VAR: &str = "CLOUDBURST_LOG_FILE";
pub const DEBUG_VAR: &str = "DEBUG";

/// Page origin that served `/api/weather` to the browser dashboard.
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";
/// Prediction backend hosting `/api/stats` and `/predict`.
pub const DEFAULT_BACKEND: &str = "http://ec2-51-20-52-197.eu-north-1.compute.amazonaws.com:5000";
pub const DEFAULT_REPORT_URL: &str = "https://app.powerbi.com/reportEmbed?reportId=150b84bb-d793-4ea5-9e45-70b3812a5ed5&autoAuth=true&ctid=bf93bb5e-ecf0-4e3d-be0e-79b5cc527a48";
pub const DEFAULT_ALERT_MS: u64 = 5000;
pub const DEFAULT_LOG_FILE: &str = "cloudburst.log";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: '{value}' ({reason})")]
    InvalidUrl {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("{var} must be a whole number, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub origin: Url,
    pub backend: Url,
    pub report_url: Url,
    pub alert_duration: Duration,
    pub request_timeout: Option<Duration>,
    pub log_file: PathBuf,
    pub debug: bool,
}

impl Default for DashboardConfig {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        // The defaults are compile-time constants known to parse.
        let parse = |value: &str| Url::parse(value).expect("default URL constant");
        Self {
            origin: parse(DEFAULT_ORIGIN),
            backend: parse(DEFAULT_BACKEND),
            report_url: parse(DEFAULT_REPORT_URL),
            alert_duration: Duration::from_millis(DEFAULT_ALERT_MS),
            request_timeout: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            debug: false,
        }
    }
}

impl DashboardConfig {
    /// Builds the configuration from a variable lookup, falling back to the
    /// defaults for anything unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(value) = read(ORIGIN_VAR) {
            config.origin = parse_url(ORIGIN_VAR, &value)?;
        }
        if let Some(value) = read(BACKEND_VAR) {
            config.backend = parse_url(BACKEND_VAR, &value)?;
        }
        if let Some(value) = read(REPORT_URL_VAR) {
            config.report_url = parse_url(REPORT_URL_VAR, &value)?;
        }
        if let Some(value) = read(ALERT_MS_VAR) {
            config.alert_duration = Duration::from_millis(parse_number(ALERT_MS_VAR, &value)?);
        }
        if let Some(value) = read(TIMEOUT_SECS_VAR) {
            let seconds = parse_number(TIMEOUT_SECS_VAR, &value)?;
            config.request_timeout = (seconds > 0).then(|| Duration::from_secs(seconds));
        }
        if let Some(value) = read(LOG_FILE_VAR) {
            config.log_file = PathBuf::from(value);
        }
        config.debug = read(DEBUG_VAR).is_some_and(|value| value != "0");

        Ok(config)
    }
}

/// Initializes the application configuration from `.env` and the process
/// environment.
pub fn init_app_config() -> Result<DashboardConfig, ConfigError> {
    // Load environment variables from .env file
    dotenv().ok();

    DashboardConfig::from_lookup(|key| env::var(key).ok())
}

fn parse_url(var: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_number(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}
