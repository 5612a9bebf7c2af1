use crate::app::App;
use crate::domain::{format_number, FetchRequest, WeatherRow};
use crate::ui::widgets::charts::{HIGH_COLOR, LOW_COLOR};
use crate::ui::widgets::loading::render_loading;
use crate::ui::widgets::tables::{format_timestamp, scroll_offset};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

const COLUMNS: [&str; 9] = [
    "City",
    "Timestamp",
    "Temp (°C)",
    "Humidity (%)",
    "Pressure (hPa)",
    "Wind (m/s)",
    "Cloudiness (%)",
    "Risk Level",
    "Prediction Score",
];

pub fn render_weather_view(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    render_search_box(app, f, chunks[0]);

    if app.weather_rows.is_empty() && app.is_loading(FetchRequest::Weather) {
        render_loading("Loading weather data...", app.animation_counter, f, chunks[1]);
        return;
    }

    render_weather_table(app, f, chunks[1]);
}

fn render_search_box(app: &App, f: &mut Frame<'_>, area: Rect) {
    let border = if app.search_focused {
        Color::Yellow
    } else {
        Color::Gray
    };

    let text = if app.search_term.is_empty() && !app.search_focused {
        TextLine::from(Span::styled(
            "Search by city... (press / to type)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let cursor = if app.search_focused { "_" } else { "" };
        TextLine::from(vec![
            Span::styled(app.search_term.clone(), Style::default().fg(Color::White)),
            Span::styled(cursor, Style::default().fg(Color::Yellow)),
        ])
    };

    let search = Paragraph::new(text).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(search, area);
}

fn risk_style(row: &WeatherRow) -> Style {
    if row.risk_level.is_high() {
        Style::default().fg(HIGH_COLOR).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(LOW_COLOR)
    }
}

fn weather_cells(row: &WeatherRow) -> Vec<Cell<'_>> {
    vec![
        Cell::from(row.city.as_str()),
        Cell::from(format_timestamp(&row.timestamp)),
        Cell::from(format_number(row.temperature)),
        Cell::from(format_number(row.humidity)),
        Cell::from(format_number(row.pressure)),
        Cell::from(format_number(row.wind_speed)),
        Cell::from(format_number(row.cloudiness)),
        Cell::from(Span::styled(row.risk_level.as_str(), risk_style(row))),
        Cell::from(format_number(row.prediction_score)),
    ]
}

fn render_weather_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let rows = app.filtered_rows();
    let block = Block::default()
        .title(format!(
            " Live Weather ({} of {}) ",
            rows.len(),
            app.weather_rows.len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if rows.is_empty() {
        let message = if app.weather_rows.is_empty() {
            "No weather data loaded."
        } else {
            "No cities match the search."
        };
        let paragraph = Paragraph::new(message)
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(COLUMNS.iter().map(|title| Cell::from(*title))).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    // Borders and header take three lines.
    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(rows.len(), max_visible_rows, app.selected_row_index);

    let body = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, row)| {
            let style = if index == app.selected_row_index {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(weather_cells(row)).style(style)
        });

    let widths = [
        Constraint::Length(14),
        Constraint::Length(24),
        Constraint::Length(9),
        Constraint::Length(12),
        Constraint::Length(14),
        Constraint::Length(10),
        Constraint::Length(14),
        Constraint::Length(11),
        Constraint::Length(16),
    ];

    let table = Table::new(body, widths)
        .header(header)
        .block(block)
        .column_spacing(1);

    f.render_widget(table, area);
}
