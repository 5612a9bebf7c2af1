// Config module for cloudburst_dashboard
// Resolves endpoints and timings from .env, the environment and CLI overrides

#[allow(clippy::module_inception)]
pub mod config;

pub use config::{init_app_config, ConfigError, DashboardConfig};
