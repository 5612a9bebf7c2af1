mod headless;
mod loop_handler;

pub use headless::{build_report, format_report, run_headless, run_predict, HeadlessReport};
pub use loop_handler::run;
