pub mod chart;
pub mod empty;
pub mod report;
pub mod weather;
