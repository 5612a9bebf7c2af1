pub mod charts;
pub mod loading;
pub mod popup;
pub mod tables;
pub mod toasts;
