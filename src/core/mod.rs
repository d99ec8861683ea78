pub mod app;
pub mod clipboard;
pub mod config;
pub mod formatter;
pub mod indicator;
pub mod marker;
pub mod paths;
pub mod presets;
pub mod session;
