// Library root: re-exports all modules so integration tests can `use weatherbeats::*`.

pub mod action;
pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod playlist;
pub mod theme;
pub mod tui;
pub mod ui;
pub mod weather;
