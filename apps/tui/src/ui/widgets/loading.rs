use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, ThrobberState, WhichUse, BRAILLE_SIX};

/// Spinner shown while a panel waits for its first data.
pub fn render_loading(label: &str, animation_counter: f64, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(inner);

    let throbber = Throbber::default()
        .label(label.to_string())
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);

    let mut state = ThrobberState::default();
    state.calc_step(spinner_step(animation_counter));
    f.render_stateful_widget(throbber, line, &mut state);
}

// The step must stay positive: a zero step picks a random frame.
#[allow(clippy::cast_possible_truncation)]
fn spinner_step(animation_counter: f64) -> i8 {
    (animation_counter * 4.0).clamp(0.0, 100.0) as i8 + 1
}
