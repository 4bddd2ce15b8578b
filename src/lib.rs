pub mod action;
pub mod app;
pub mod client;
pub mod config;
pub mod event;
pub mod format;
pub mod logging;
pub mod render;
pub mod server;
pub mod system;
pub mod ui;
