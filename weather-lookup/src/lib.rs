//! Weather lookup TUI
//!
//! Searches a city against the `/api/weather` backend and shows the current
//! conditions. The library exposes the modules for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod icons;
pub mod logging;
pub mod reducer;
pub mod state;
pub mod view;
