use crate::config::DashboardConfig;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::OpenOptions;

/// Installs the global logger.
///
/// The terminal UI owns stdout and the alternate screen, so interactive runs
/// log to the configured file. Headless runs log to stderr.
pub fn init_logging(config: &DashboardConfig, interactive: bool) -> Result<()> {
    let mut builder = Builder::new();
    builder.filter_level(default_level(config.debug));
    // RUST_LOG still wins when set
    builder.parse_env(Env::default());

    if interactive {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file)
            .wrap_err_with(|| format!("Failed to open log file {}", config.log_file.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder.try_init().wrap_err("Failed to install logger")?;
    Ok(())
}

const fn default_level(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}
