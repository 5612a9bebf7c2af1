use crate::app::state::App;
use crate::ui::widgets::toasts::toast_at;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use log::debug;
use ratatui::layout::Rect;

/// A left click on a toast dismisses it. Other mouse input is ignored.
pub fn handle_mouse(app: &mut App, event: MouseEvent, area: Rect) {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    if let Some(id) = toast_at(&app.toasts, area, event.column, event.row) {
        debug!("Dismissing toast {id} on click");
        app.toasts.dismiss(id);
    }
}
