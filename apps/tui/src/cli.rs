use crate::config::config::{
    ALERT_MS_VAR, BACKEND_VAR, DEBUG_VAR, LOG_FILE_VAR, ORIGIN_VAR, REPORT_URL_VAR,
    TIMEOUT_SECS_VAR,
};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "cloudburst_dashboard", version, about = "Cloudburst Risk Dashboard")]
pub struct CliArgs {
    /// Fetch weather and stats once, print them and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Ask the backend for the risk prediction of one city and exit
    #[arg(long, value_name = "CITY")]
    pub predict: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the origin serving /api/weather
    #[arg(long, value_name = "URL")]
    pub origin: Option<String>,

    /// Override the backend serving /api/stats and /predict
    #[arg(long, value_name = "URL")]
    pub backend: Option<String>,

    /// Override the embedded report URL
    #[arg(long = "report-url", value_name = "URL")]
    pub report_url: Option<String>,

    /// How long each alert stays on screen, in milliseconds
    #[arg(long = "alert-ms", value_name = "MS")]
    pub alert_ms: Option<u64>,

    /// HTTP request timeout in seconds (0 disables it)
    #[arg(long = "timeout-secs", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Where terminal-mode logs are written
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    /// Environment assignments implied by the given flags.
    pub fn env_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();
        if let Some(origin) = &self.origin {
            overrides.push((ORIGIN_VAR, origin.clone()));
        }
        if let Some(backend) = &self.backend {
            overrides.push((BACKEND_VAR, backend.clone()));
        }
        if let Some(url) = &self.report_url {
            overrides.push((REPORT_URL_VAR, url.clone()));
        }
        if let Some(ms) = self.alert_ms {
            overrides.push((ALERT_MS_VAR, ms.to_string()));
        }
        if let Some(secs) = self.timeout_secs {
            overrides.push((TIMEOUT_SECS_VAR, secs.to_string()));
        }
        if let Some(path) = &self.log_file {
            overrides.push((LOG_FILE_VAR, path.clone()));
        }
        if self.debug {
            overrides.push((DEBUG_VAR, "1".to_string()));
        }
        overrides
    }

    pub fn apply_env_overrides(&self) {
        for (key, value) in self.env_overrides() {
            std::env::set_var(key, value);
        }
    }
}
