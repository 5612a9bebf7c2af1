// Rendering for the dashboard: navigation, the active panel, status and overlays

pub mod screens;
pub mod widgets;

use crate::app::App;
use crate::domain::View;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use crate::ui::widgets::toasts::render_toasts;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tachyonfx::EffectRenderer;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation
            Constraint::Min(6),    // Active panel
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area());

    render_navigation(app, f, layout[0]);
    render_panel(app, f, layout[1]);
    render_status_section(app, f, layout[2]);
    render_shortcuts(f, layout[3]);

    let area = f.area();
    if app.show_help {
        render_help_popup(f, area);
    }

    render_toasts(&app.toasts, app.last_frame, f, area);
}

fn render_navigation(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Cloudburst Risk Dashboard ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut spans = Vec::new();
    for (index, view) in View::navigable().iter().enumerate() {
        let style = if *view == app.view {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} {} ", index + 1, view.label()), style));
        spans.push(Span::raw("  "));
    }

    let paragraph = Paragraph::new(TextLine::from(spans))
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    match app.view {
        View::Empty => screens::empty::render_empty_view(f, area),
        View::Weather => screens::weather::render_weather_view(app, f, area),
        View::Chart => screens::chart::render_chart_view(app, f, area),
        View::PowerBi => screens::report::render_report_view(app, f, area),
    }

    if let Ok(mut effect) = app.view_fx.lock() {
        if let Some(effect) = effect.as_mut() {
            f.buffer_mut().render_effect(effect, area, app.last_tick);
        }
    }
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let style = if app.status_message.starts_with("Error") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };

    let status = Paragraph::new(TextLine::from(Span::styled(
        app.status_message.clone(),
        style,
    )))
    .block(status_block)
    .wrap(Wrap { trim: true });

    f.render_widget(status, area);
}

fn shortcut(key: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(
            key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(action),
    ]
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let spans = [
        shortcut("1-3", ": Panels   "),
        shortcut("/", ": Search   "),
        shortcut("x", ": Dismiss alert   "),
        shortcut("F1", ": Help   "),
        shortcut("q", ": Quit"),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();

    let paragraph = Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn help_line(key: &'static str, description: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {key:<10}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(description),
    ])
}

fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(70, 70, area);
    f.render_widget(ClearWidget, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        TextLine::from(Span::styled(
            "Cloudburst Risk Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        help_line("1 / 2 / 3", "Live weather, risk chart, Power BI report"),
        help_line("Tab", "Next panel (Shift+Tab goes back)"),
        help_line("/", "Search cities in the weather table"),
        help_line("Esc", "Leave the search box, or clear the search"),
        help_line("Up/Down", "Move through weather rows (PgUp/PgDn pages)"),
        help_line("p / b / l", "Pie, bar or line chart"),
        help_line("Left/Right", "Cycle chart types"),
        help_line("x", "Dismiss the newest alert (or click it)"),
        help_line("F1", "Toggle this help"),
        help_line("q", "Quit"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Press F1 or Esc to close",
            Style::default().fg(Color::Gray),
        )),
    ];

    let help = Paragraph::new(Text::from(lines))
        .block(help_block)
        .wrap(Wrap { trim: false });
    f.render_widget(help, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fixtures::{risk_stats, row};
    use crate::config::DashboardConfig;
    use crate::domain::ChartKind;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    fn screen_text(app: &App) -> Result<String, Box<dyn std::error::Error>> {
        let mut terminal = Terminal::new(TestBackend::new(140, 40))?;
        terminal.draw(|f| ui(app, f))?;
        let buffer = terminal.backend().buffer();
        Ok(buffer.content().iter().map(|cell| cell.symbol()).collect())
    }

    #[test]
    fn weather_panel_shows_only_matching_rows() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = App::new(&DashboardConfig::default());
        app.view = View::Weather;
        app.weather_rows = vec![row("London", "Low Risk"), row("Pune", "High Risk")];
        app.search_term = "lon".to_string();

        let text = screen_text(&app)?;
        assert!(text.contains("London"));
        assert!(!text.contains("Pune"));
        assert!(text.contains("Prediction Score"));

        Ok(())
    }

    #[test]
    fn every_chart_kind_renders() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = App::new(&DashboardConfig::default());
        app.view = View::Chart;
        app.stats = risk_stats();

        for kind in ChartKind::ALL {
            app.set_chart_kind(kind);
            let text = screen_text(&app)?;
            assert!(text.contains("High Risk"), "{} chart lost its labels", kind.as_str());
        }

        Ok(())
    }

    #[test]
    fn report_panel_lists_the_embed_url() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = App::new(&DashboardConfig::default());
        app.view = View::PowerBi;

        let text = screen_text(&app)?;
        assert!(text.contains("150b84bb-d793-4ea5-9e45-70b3812a5ed5"));

        Ok(())
    }

    #[test]
    fn errors_and_toasts_are_drawn() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = App::new(&DashboardConfig::default());
        app.status_message = "Error: failed to load weather data".to_string();
        app.toasts
            .notify("High Risk Alert in Leh!", Duration::from_secs(5), app.last_frame);

        let text = screen_text(&app)?;
        assert!(text.contains("failed to load weather data"));
        assert!(text.contains("High Risk Alert in Leh!"));

        Ok(())
    }

    #[test]
    fn help_popup_lists_shortcuts() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = App::new(&DashboardConfig::default());
        app.show_help = true;

        let text = screen_text(&app)?;
        assert!(text.contains("Help & Keyboard Shortcuts"));

        Ok(())
    }
}
