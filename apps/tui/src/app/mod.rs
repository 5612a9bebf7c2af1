// App module for cloudburst_dashboard
// Handles application state, data refresh and input

pub mod actions;
pub mod alerts;
pub mod filter;
pub mod input;
pub mod state;

#[cfg(test)]
pub mod fixtures;

pub use actions::{activate_view, drain_outcomes, FetchOutcome, Fetcher};
pub use input::{handle_input, handle_mouse};
pub use state::App;
