use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_empty_view(f: &mut Frame<'_>, area: Rect) {
    let text = Text::from(vec![
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Pick a panel to get started.",
            Style::default().fg(Color::White),
        )),
        TextLine::from(Span::styled(
            "1 Live Weather   2 Risk Chart   3 Power BI Report",
            Style::default().fg(Color::Gray),
        )),
    ]);

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
