use clap::Parser;
use cloudburst_dashboard::api::{DashboardClient, DataSource};
use cloudburst_dashboard::app::{App, Fetcher};
use cloudburst_dashboard::cli::CliArgs;
use cloudburst_dashboard::config::init_app_config;
use cloudburst_dashboard::logging::init_logging;
use cloudburst_dashboard::{event, terminal};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = init_app_config().wrap_err("Invalid configuration")?;

    let interactive = is_terminal() && !args.headless && !args.json && args.predict.is_none();
    init_logging(&config, interactive)?;
    info!(
        "Starting dashboard (origin {}, backend {})",
        config.origin, config.backend
    );

    let client = DashboardClient::new(&config).wrap_err("Failed to build HTTP client")?;
    let source: Arc<dyn DataSource> = Arc::new(client);

    if let Some(city) = args.predict.as_deref() {
        return event::run_predict(source.as_ref(), city, args.json).await;
    }

    if !interactive {
        // Run in headless mode
        return event::run_headless(source.as_ref(), args.json).await;
    }

    let mut app = App::new(&config);
    let (fetcher, mut receiver) = Fetcher::new(source);

    let mut terminal = terminal::setup_terminal()?;
    let result = event::run(&mut terminal, &mut app, &fetcher, &mut receiver).await;
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
