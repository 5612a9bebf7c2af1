use crate::app::alerts::ToastStack;
use crate::ui::widgets::charts::HIGH_COLOR;
use crate::ui::widgets::popup::ClearWidget;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;
use std::time::Instant;

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 4;
const TOAST_MARGIN: u16 = 1;

/// Where each toast goes, oldest at the top of the right-hand column.
/// Toasts that would run off the bottom are left out.
pub fn toast_rects(area: Rect, count: usize) -> Vec<Rect> {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width + TOAST_MARGIN).max(area.x);

    (0..count)
        .map_while(|index| {
            let offset = u16::try_from(index).ok()?.checked_mul(TOAST_HEIGHT)?;
            let y = area.y.checked_add(TOAST_MARGIN)?.checked_add(offset)?;
            (y + TOAST_HEIGHT <= area.bottom()).then(|| Rect::new(x, y, width, TOAST_HEIGHT))
        })
        .collect()
}

/// The toast under the given cell, if any.
pub fn toast_at(toasts: &ToastStack, area: Rect, column: u16, row: u16) -> Option<u64> {
    let position = Position::new(column, row);
    toasts
        .iter()
        .zip(toast_rects(area, toasts.len()))
        .find(|(_, rect)| rect.contains(position))
        .map(|(toast, _)| toast.id)
}

pub fn render_toasts(toasts: &ToastStack, now: Instant, f: &mut Frame<'_>, area: Rect) {
    for (toast, rect) in toasts.iter().zip(toast_rects(area, toasts.len())) {
        f.render_widget(ClearWidget, rect);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(HIGH_COLOR))
            .title(Span::styled(" alert ", Style::default().fg(Color::Gray)));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        if inner.height == 0 {
            continue;
        }

        let message = Paragraph::new(TextLine::from(Span::styled(
            toast.message.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        f.render_widget(message, Rect { height: 1, ..inner });

        if inner.height > 1 {
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(HIGH_COLOR).bg(Color::Black))
                .ratio(toast.remaining_ratio(now))
                .label("");
            f.render_widget(
                gauge,
                Rect {
                    y: inner.y + 1,
                    height: 1,
                    ..inner
                },
            );
        }
    }
}
