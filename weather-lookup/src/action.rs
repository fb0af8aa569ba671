//! Actions: user intents and async results, categorized by prefix

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherResult;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Open the city search overlay
    SearchOpen,

    /// Close the overlay without searching
    SearchClose,

    /// Overlay text changed
    SearchQueryChange(String),

    /// Submit a city name (raw input, trimmed by the reducer)
    SearchSubmit(String),

    /// Submit the quick pick at the given index
    SearchExample(usize),

    // ===== Weather category =====
    /// Search the last submitted city again
    WeatherRefresh,

    /// Result: backend returned a weather report
    WeatherDidLoad(WeatherResult),

    /// Result: fetch failed, carries the message to show
    WeatherDidError(String),

    // ===== Uncategorized (global) =====
    /// Force a re-render (cursor movement etc.)
    Render,

    /// Spinner frame while loading
    Tick,

    /// Exit the application
    Quit,
}
