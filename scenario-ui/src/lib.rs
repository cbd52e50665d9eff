pub mod app;
pub mod config;
pub mod csv_loader;
pub mod export;
pub mod logging;
pub mod models;
pub mod report;
pub mod tui;
pub mod utils;
pub mod views;
