use crate::app::actions::FetchOutcome;
use crate::app::alerts::{high_risk_message, ToastStack};
use crate::app::filter::filter_rows;
use crate::config::DashboardConfig;
use crate::domain::{ChartKind, FetchRequest, StatEntry, View, WeatherRow};
use log::{debug, warn};
use ratatui::style::Color;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tachyonfx::{fx, Effect, Interpolation};
use url::Url;

const VIEW_FADE_MS: u32 = 400;

pub struct App {
    pub running: bool,
    pub view: View,
    pub chart_kind: ChartKind,
    pub search_term: String,
    pub search_focused: bool,
    pub weather_rows: Vec<WeatherRow>,
    pub stats: Vec<StatEntry>,
    pub toasts: ToastStack,
    pub alert_duration: Duration,
    pub report_url: Url,
    pub status_message: String,
    pub show_help: bool,
    pub selected_row_index: usize,
    pub pending_weather: usize,
    pub pending_stats: usize,
    pub animation_counter: f64,
    pub last_frame: Instant,
    pub last_tick: Duration,
    pub view_fx: Mutex<Option<Effect>>,
}

impl App {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            running: true,
            view: View::Empty,
            chart_kind: ChartKind::default(),
            search_term: String::new(),
            search_focused: false,
            weather_rows: Vec::new(),
            stats: Vec::new(),
            toasts: ToastStack::new(),
            alert_duration: config.alert_duration,
            report_url: config.report_url.clone(),
            status_message: String::new(),
            show_help: false,
            selected_row_index: 0,
            pending_weather: 0,
            pending_stats: 0,
            animation_counter: 0.0,
            last_frame: Instant::now(),
            last_tick: Duration::ZERO,
            view_fx: Mutex::new(None),
        }
    }

    /// Makes `view` the active panel.
    ///
    /// Returns the request the new view needs when the view actually
    /// changed. Re-selecting the active view returns `None`.
    pub fn set_active_view(&mut self, view: View) -> Option<FetchRequest> {
        if self.view == view {
            return None;
        }

        debug!("Switching from {} to {} view", self.view.as_str(), view.as_str());
        self.view = view;
        self.search_focused = false;
        self.start_view_fade();
        view.fetch_request()
    }

    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        self.chart_kind = kind;
    }

    pub fn filtered_rows(&self) -> Vec<&WeatherRow> {
        filter_rows(&self.weather_rows, &self.search_term)
    }

    pub fn begin_fetch(&mut self, request: FetchRequest) {
        match request {
            FetchRequest::Weather => self.pending_weather += 1,
            FetchRequest::Stats => self.pending_stats += 1,
        }
    }

    pub const fn is_loading(&self, request: FetchRequest) -> bool {
        match request {
            FetchRequest::Weather => self.pending_weather > 0,
            FetchRequest::Stats => self.pending_stats > 0,
        }
    }

    /// The single place fetched data enters the state.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome, now: Instant) {
        match outcome {
            FetchOutcome::Weather(result) => {
                self.pending_weather = self.pending_weather.saturating_sub(1);
                match result {
                    Ok(rows) => self.replace_weather_rows(rows, now),
                    Err(e) => {
                        warn!("Weather fetch failed: {e}");
                        self.status_message = format!("Error: failed to load weather data: {e}");
                    }
                }
            }
            FetchOutcome::Stats(result) => {
                self.pending_stats = self.pending_stats.saturating_sub(1);
                match result {
                    Ok(entries) => {
                        self.status_message = format!("Risk stats updated: {} categories", entries.len());
                        self.stats = entries;
                    }
                    Err(e) => {
                        warn!("Stats fetch failed: {e}");
                        self.status_message = format!("Error: failed to load risk stats: {e}");
                    }
                }
            }
        }
    }

    fn replace_weather_rows(&mut self, rows: Vec<WeatherRow>, now: Instant) {
        self.weather_rows = rows;
        self.clamp_selection();
        self.status_message = format!("Weather updated: {} rows", self.weather_rows.len());

        for row in self.weather_rows.iter().filter(|row| row.risk_level.is_high()) {
            self.toasts
                .notify(high_risk_message(&row.city), self.alert_duration, now);
        }
    }

    pub fn clamp_selection(&mut self) {
        let visible = self.filtered_rows().len();
        if visible == 0 {
            self.selected_row_index = 0;
        } else if self.selected_row_index >= visible {
            self.selected_row_index = visible - 1;
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.last_tick = delta;

        // Update animation counter (cycles between 0 and 2*PI)
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }

        self.toasts.expire(now);
    }

    fn start_view_fade(&self) {
        if let Ok(mut effect) = self.view_fx.lock() {
            *effect = Some(fx::fade_from_fg(
                Color::Black,
                (VIEW_FADE_MS, Interpolation::QuadOut),
            ));
        }
    }
}
