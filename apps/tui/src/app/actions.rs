use crate::api::{ApiError, DataSource};
use crate::app::state::App;
use crate::domain::{FetchRequest, StatEntry, View, WeatherRow};
use log::{debug, info};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// A finished request, delivered back to the event loop.
#[derive(Debug)]
pub enum FetchOutcome {
    Weather(Result<Vec<WeatherRow>, ApiError>),
    Stats(Result<Vec<StatEntry>, ApiError>),
}

impl FetchOutcome {
    pub const fn request(&self) -> FetchRequest {
        match self {
            Self::Weather(_) => FetchRequest::Weather,
            Self::Stats(_) => FetchRequest::Stats,
        }
    }
}

/// Issues requests off the UI thread. Outcomes come back through the
/// channel in arrival order; nothing is cancelled.
#[derive(Clone)]
pub struct Fetcher {
    source: Arc<dyn DataSource>,
    sender: UnboundedSender<FetchOutcome>,
}

impl Fetcher {
    pub fn new(source: Arc<dyn DataSource>) -> (Self, UnboundedReceiver<FetchOutcome>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { source, sender }, receiver)
    }

    pub fn dispatch(&self, app: &mut App, request: FetchRequest) -> JoinHandle<()> {
        app.begin_fetch(request);
        self.spawn(request)
    }

    fn spawn(&self, request: FetchRequest) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();
        debug!("Dispatching {} request", request.as_str());

        tokio::spawn(async move {
            let outcome = fetch_once(source.as_ref(), request).await;
            if sender.send(outcome).is_err() {
                debug!("Dropped {} outcome, event loop has exited", request.as_str());
            }
        })
    }
}

pub async fn fetch_once(source: &dyn DataSource, request: FetchRequest) -> FetchOutcome {
    match request {
        FetchRequest::Weather => FetchOutcome::Weather(source.fetch_weather().await),
        FetchRequest::Stats => FetchOutcome::Stats(source.fetch_stats().await),
    }
}

/// Switches the view and fires the request owed to it, if any.
pub fn activate_view(app: &mut App, fetcher: &Fetcher, view: View) -> Option<JoinHandle<()>> {
    app.set_active_view(view)
        .map(|request| fetcher.dispatch(app, request))
}

/// Applies every outcome that has already arrived.
pub fn drain_outcomes(app: &mut App, receiver: &mut UnboundedReceiver<FetchOutcome>) -> usize {
    let mut applied = 0;
    while let Ok(outcome) = receiver.try_recv() {
        info!("Applying {} outcome", outcome.request().as_str());
        app.apply_outcome(outcome, Instant::now());
        applied += 1;
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fixtures::{row, ScriptedSource};
    use crate::config::DashboardConfig;
    use crate::domain::ChartKind;

    fn setup(source: &Arc<ScriptedSource>) -> (App, Fetcher, UnboundedReceiver<FetchOutcome>) {
        let app = App::new(&DashboardConfig::default());
        let shared: Arc<dyn DataSource> = source.clone();
        let (fetcher, receiver) = Fetcher::new(shared);
        (app, fetcher, receiver)
    }

    #[tokio::test]
    async fn each_transition_fetches_once_for_data_views() -> Result<(), Box<dyn std::error::Error>> {
        let source = Arc::new(ScriptedSource::ready(vec![row("Pune", "High Risk")]));
        let (mut app, fetcher, mut receiver) = setup(&source);

        for view in [View::Weather, View::PowerBi, View::Chart, View::Weather] {
            if let Some(handle) = activate_view(&mut app, &fetcher, view) {
                handle.await?;
            }
        }

        assert_eq!(source.weather_calls(), 2);
        assert_eq!(source.stats_calls(), 1);
        assert_eq!(drain_outcomes(&mut app, &mut receiver), 3);

        Ok(())
    }

    #[tokio::test]
    async fn reselecting_the_active_view_fetches_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let source = Arc::new(ScriptedSource::ready(Vec::new()));
        let (mut app, fetcher, _receiver) = setup(&source);

        if let Some(handle) = activate_view(&mut app, &fetcher, View::Chart) {
            handle.await?;
        }
        assert!(activate_view(&mut app, &fetcher, View::Chart).is_none());
        assert!(activate_view(&mut app, &fetcher, View::Chart).is_none());

        assert_eq!(source.stats_calls(), 1);
        assert_eq!(source.weather_calls(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn last_response_to_arrive_wins() -> Result<(), Box<dyn std::error::Error>> {
        let source = Arc::new(ScriptedSource::gated());
        let first_gate = source.gate_weather();
        let second_gate = source.gate_weather();
        let (mut app, fetcher, mut receiver) = setup(&source);

        let first = activate_view(&mut app, &fetcher, View::Weather);
        activate_view(&mut app, &fetcher, View::PowerBi);
        let second = activate_view(&mut app, &fetcher, View::Weather);
        assert_eq!(app.pending_weather, 2);

        // The later activation resolves first, the earlier one afterwards.
        second_gate
            .send(Ok(vec![row("Goa", "Low Risk")]))
            .map_err(|_| "second gate closed")?;
        if let Some(handle) = second {
            handle.await?;
        }
        drain_outcomes(&mut app, &mut receiver);
        assert_eq!(app.weather_rows[0].city, "Goa");

        first_gate
            .send(Ok(vec![row("Pune", "High Risk")]))
            .map_err(|_| "first gate closed")?;
        if let Some(handle) = first {
            handle.await?;
        }
        drain_outcomes(&mut app, &mut receiver);

        let cities: Vec<_> = app.weather_rows.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(cities, vec!["Pune"]);
        assert_eq!(app.pending_weather, 0);

        Ok(())
    }

    #[tokio::test]
    async fn chart_kind_survives_view_switches_without_fetching() -> Result<(), Box<dyn std::error::Error>> {
        let source = Arc::new(ScriptedSource::ready(Vec::new()));
        let (mut app, fetcher, mut receiver) = setup(&source);

        if let Some(handle) = activate_view(&mut app, &fetcher, View::Chart) {
            handle.await?;
        }
        drain_outcomes(&mut app, &mut receiver);
        let stats = app.stats.clone();

        for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Pie, ChartKind::Line] {
            app.set_chart_kind(kind);
        }
        assert_eq!(app.stats, stats);
        assert_eq!(source.stats_calls(), 1);

        activate_view(&mut app, &fetcher, View::PowerBi);
        assert_eq!(app.chart_kind, ChartKind::Line);

        Ok(())
    }
}
