use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use crate::domain::ChartKind;
use crossterm::event::KeyCode;

pub fn handle_chart_input(app: &mut App, key: KeyCode) {
    let len = ChartKind::ALL.len();
    let index = app.chart_kind.index();

    let next = match key {
        KeyCode::Char(c) => ChartKind::from_shortcut(c),
        KeyCode::Left => ChartKind::from_index(wrap_decrement(index, len)),
        KeyCode::Right => ChartKind::from_index(wrap_increment(index, len)),
        _ => None,
    };

    if let Some(kind) = next {
        app.set_chart_kind(kind);
    }
}
