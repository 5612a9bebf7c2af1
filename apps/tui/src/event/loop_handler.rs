use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::app::{drain_outcomes, handle_input, handle_mouse, App, FetchOutcome, Fetcher};
use crate::ui;

/// Run the dashboard event loop until the user quits
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    fetcher: &Fetcher,
    receiver: &mut UnboundedReceiver<FetchOutcome>,
) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    info!("Dashboard event loop started");

    while app.running {
        // Fetches finish on their own tasks; apply whatever has arrived
        drain_outcomes(app, receiver);
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            // Let spawned fetches make progress between polls
            tokio::task::yield_now().await;
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if let Some(request) = handle_input(app, key.code) {
                    fetcher.dispatch(app, request);
                }
            }
            Ok(Event::Mouse(mouse)) => {
                let area = terminal
                    .size()
                    .map(|size| Rect::new(0, 0, size.width, size.height))
                    .unwrap_or_default();
                handle_mouse(app, mouse, area);
            }
            Ok(Event::Resize(width, height)) => {
                debug!("Terminal resized to {width}x{height}");
            }
            Ok(_) => {}
            Err(e) => {
                debug!("Ignoring unreadable terminal event: {e}");
            }
        }
    }

    info!("Dashboard event loop finished");
    Ok(())
}
