pub mod app;
pub mod config;
pub mod data;
pub mod logging;
pub mod render;
pub mod ui;
