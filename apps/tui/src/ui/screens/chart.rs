use crate::app::App;
use crate::domain::{ChartKind, FetchRequest};
use crate::ui::widgets::charts::{render_bar_chart, render_line_chart, render_pie_chart};
use crate::ui::widgets::loading::render_loading;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

pub fn render_chart_view(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    render_chart_tabs(app, f, chunks[0]);

    if app.stats.is_empty() && app.is_loading(FetchRequest::Stats) {
        render_loading("Loading risk stats...", app.animation_counter, f, chunks[1]);
        return;
    }

    match app.chart_kind {
        ChartKind::Pie => render_pie_chart(&app.stats, f, chunks[1]),
        ChartKind::Bar => render_bar_chart(&app.stats, f, chunks[1]),
        ChartKind::Line => render_line_chart(&app.stats, f, chunks[1]),
    }
}

fn render_chart_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = ChartKind::ALL
        .iter()
        .map(|kind| TextLine::from(kind.label()))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.chart_kind.index())
        .block(
            Block::default()
                .title(" Chart type (p/b/l) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}
