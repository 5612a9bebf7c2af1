use crate::domain::{format_number, StatEntry};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph,
};
use ratatui::Frame;
use std::f64::consts::TAU;

pub const HIGH_COLOR: Color = Color::Rgb(0xFF, 0x4C, 0x4C);
pub const LOW_COLOR: Color = Color::Rgb(0x00, 0xC4, 0x9F);

const PIE_PALETTE: [Color; 2] = [HIGH_COLOR, LOW_COLOR];
// Radial strokes drawn per full turn of the pie.
const PIE_STROKES: usize = 720;

pub const fn slice_color(index: usize) -> Color {
    PIE_PALETTE[index % PIE_PALETTE.len()]
}

/// Start and sweep angle of each slice, in entry order.
///
/// Non-positive values get no sweep. Returns an empty list when nothing is
/// left to draw.
pub fn pie_slices(stats: &[StatEntry]) -> Vec<(f64, f64)> {
    let total: f64 = stats.iter().map(|entry| entry.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    stats
        .iter()
        .map(|entry| {
            let sweep = entry.value.max(0.0) / total * TAU;
            let slice = (start, sweep);
            start += sweep;
            slice
        })
        .collect()
}

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

fn render_no_data(f: &mut Frame<'_>, area: Rect, title: &str) {
    let paragraph = Paragraph::new("No risk stats available")
        .block(chart_block(title))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

pub fn render_pie_chart(stats: &[StatEntry], f: &mut Frame<'_>, area: Rect) {
    let slices = pie_slices(stats);
    if slices.is_empty() {
        render_no_data(f, area, "Risk Distribution");
        return;
    }

    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let canvas = Canvas::default()
        .block(chart_block("Risk Distribution"))
        .marker(Marker::Braille)
        .x_bounds([-1.2, 1.2])
        .y_bounds([-1.2, 1.2])
        .paint(|ctx| {
            for (index, (start, sweep)) in slices.iter().enumerate() {
                let color = slice_color(index);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let strokes = ((sweep / TAU) * PIE_STROKES as f64).ceil() as usize;

                for step in 0..=strokes {
                    #[allow(clippy::cast_precision_loss)]
                    let angle = start + sweep * (step as f64 / strokes.max(1) as f64);
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: angle.cos(),
                        y2: angle.sin(),
                        color,
                    });
                }
            }

            ctx.layer();

            for (entry, (start, sweep)) in stats.iter().zip(&slices) {
                if *sweep <= 0.0 {
                    continue;
                }
                let middle = start + sweep / 2.0;
                ctx.print(
                    middle.cos() * 0.6,
                    middle.sin() * 0.6,
                    TextLine::styled(
                        format!("{}: {}", entry.name, format_number(entry.value)),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    f.render_widget(canvas, split[0]);
    render_legend(stats, f, split[1]);
}

fn render_legend(stats: &[StatEntry], f: &mut Frame<'_>, area: Rect) {
    let lines = stats
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            TextLine::from(vec![
                Span::styled("■ ", Style::default().fg(slice_color(index))),
                Span::raw(format!("{}: {}", entry.name, format_number(entry.value))),
            ])
        })
        .collect::<Vec<_>>();

    f.render_widget(Paragraph::new(lines).block(chart_block("Legend")), area);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar_value(value: f64) -> u64 {
    value.max(0.0).round() as u64
}

pub fn render_bar_chart(stats: &[StatEntry], f: &mut Frame<'_>, area: Rect) {
    if stats.is_empty() {
        render_no_data(f, area, "Risk Counts");
        return;
    }

    let bars: Vec<Bar<'_>> = stats
        .iter()
        .map(|entry| {
            Bar::default()
                .value(bar_value(entry.value))
                .text_value(format_number(entry.value))
                .label(TextLine::from(entry.name.as_str()))
                .style(Style::default().fg(LOW_COLOR))
                .value_style(Style::default().fg(Color::Black).bg(LOW_COLOR).add_modifier(Modifier::BOLD))
        })
        .collect();

    let max_value = bars_max(stats);

    let chart = BarChart::default()
        .block(chart_block("Risk Counts"))
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(2)
        .bar_width(10);

    f.render_widget(chart, area);
}

fn bars_max(stats: &[StatEntry]) -> u64 {
    stats
        .iter()
        .map(|entry| bar_value(entry.value))
        .max()
        .unwrap_or(0)
        .max(1)
}

/// One point per entry, x being the entry's position in response order.
pub fn line_points(stats: &[StatEntry]) -> Vec<(f64, f64)> {
    stats
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            #[allow(clippy::cast_precision_loss)]
            let x = index as f64;
            (x, entry.value)
        })
        .collect()
}

pub fn render_line_chart(stats: &[StatEntry], f: &mut Frame<'_>, area: Rect) {
    if stats.is_empty() {
        render_no_data(f, area, "Risk Trend");
        return;
    }

    let points = line_points(stats);
    #[allow(clippy::cast_precision_loss)]
    let x_max = (stats.len().saturating_sub(1) as f64).max(1.0);
    let y_max = stats
        .iter()
        .map(|entry| entry.value)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let dataset = Dataset::default()
        .name("Risk")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(HIGH_COLOR))
        .data(&points);

    let x_labels = stats
        .iter()
        .map(|entry| Span::raw(entry.name.clone()))
        .collect::<Vec<_>>();
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format_number((y_max / 2.0).round())),
        Span::raw(format_number(y_max)),
    ];

    let chart = Chart::new(vec![dataset])
        .block(chart_block("Risk Trend"))
        .x_axis(
            Axis::default()
                .title("Category")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Count")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}
