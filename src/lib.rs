pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod logging;
pub mod persistence;
pub mod session;
pub mod store;
pub mod ui;
