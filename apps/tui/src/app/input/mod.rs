mod helpers;
mod mouse;
pub mod screens;

use crate::app::state::App;
use crate::domain::FetchRequest;
use crossterm::event::KeyCode;

pub use mouse::handle_mouse;

/// Routes one key press. Returns the request owed to a view the key
/// switched into.
pub fn handle_input(app: &mut App, key: KeyCode) -> Option<FetchRequest> {
    screens::dispatch_input(app, key)
}
