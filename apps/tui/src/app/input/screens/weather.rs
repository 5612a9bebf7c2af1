use crate::app::input::helpers::step_forward;
use crate::app::state::App;
use crossterm::event::KeyCode;

const PAGE_STEP: usize = 5;

pub fn handle_weather_input(app: &mut App, key: KeyCode) {
    let visible = app.filtered_rows().len();

    match key {
        KeyCode::Char('/') => {
            app.search_focused = true;
        }
        KeyCode::Esc => {
            if !app.search_term.is_empty() {
                app.search_term.clear();
                app.selected_row_index = 0;
            }
        }
        KeyCode::Up => {
            app.selected_row_index = app.selected_row_index.saturating_sub(1);
        }
        KeyCode::Down => {
            app.selected_row_index = step_forward(app.selected_row_index, 1, visible);
        }
        KeyCode::PageUp => {
            app.selected_row_index = app.selected_row_index.saturating_sub(PAGE_STEP);
        }
        KeyCode::PageDown => {
            app.selected_row_index = step_forward(app.selected_row_index, PAGE_STEP, visible);
        }
        KeyCode::Home => {
            app.selected_row_index = 0;
        }
        KeyCode::End => {
            app.selected_row_index = visible.saturating_sub(1);
        }
        _ => {}
    }
}

/// Edits the search term. Every change restarts the selection at the top
/// of the freshly filtered rows.
pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(c) => {
            app.search_term.push(c);
            app.selected_row_index = 0;
        }
        KeyCode::Backspace => {
            if app.search_term.pop().is_some() {
                app.selected_row_index = 0;
            }
        }
        KeyCode::Enter | KeyCode::Esc => {
            app.search_focused = false;
        }
        _ => {}
    }
}
