// Remote data access for the dashboard

pub mod client;
pub mod error;
pub mod source;

pub use client::DashboardClient;
pub use error::ApiError;
pub use source::{flatten_stats, DataSource, Prediction};
