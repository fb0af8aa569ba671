//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shown when a search is submitted with nothing but whitespace.
pub const EMPTY_CITY_MESSAGE: &str = "Please enter a city name";

/// Used when a failed fetch produced no message of its own.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data";

/// Quick picks offered on the main screen.
pub const DEFAULT_EXAMPLES: [&str; 5] = ["London", "Tokyo", "New York", "Jakarta", "Paris"];

/// Spinner animation timing while a search is in flight.
pub const LOADING_TICK_MS: u64 = 80;

/// Snapshot of present weather at the resolved location
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurrentConditions {
    pub temp: f64,
    #[serde(default)]
    pub feelslike: Option<f64>,
    #[serde(default)]
    pub conditions: Option<String>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub windspeed: Option<f64>,
    #[serde(default)]
    pub pressure: Option<f64>,
    #[serde(default)]
    pub visibility: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    /// Observation time as sent by the provider (often just `HH:MM:SS`)
    #[serde(default)]
    pub datetime: Option<String>,
    /// Observation time in unix seconds, preferred over `datetime` when present
    #[serde(default, rename = "datetimeEpoch")]
    pub datetime_epoch: Option<i64>,
}

/// Successful body of `GET /api/weather`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResult {
    /// "City, Country" as resolved by the provider
    #[serde(default)]
    pub resolved_address: Option<String>,
    /// The address as it was queried
    #[serde(default)]
    pub address: Option<String>,
    pub current_conditions: CurrentConditions,
    /// Served from the backend cache rather than a fresh upstream call
    #[serde(default)]
    pub cached: bool,
}

/// What the screen is showing. Exactly one at a time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum DisplayState {
    #[default]
    Idle,
    Loading,
    Success(WeatherResult),
    Error { title: String, message: String },
}

impl DisplayState {
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        DisplayState::Error {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DisplayState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DisplayState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DisplayState::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DisplayState::Error { .. })
    }

    pub fn result(&self) -> Option<&WeatherResult> {
        match self {
            DisplayState::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Error title, if the last search failed
    pub fn error_title(&self) -> Option<&str> {
        match self {
            DisplayState::Error { title, .. } => Some(title),
            _ => None,
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Search lifecycle: Idle → Loading → Success/Error → Loading → ...
    #[debug(section = "Search", label = "Display", debug_fmt)]
    pub display: DisplayState,

    /// Last city that was actually sent to the backend
    #[debug(section = "Search", label = "City", debug_fmt)]
    pub last_city: Option<String>,

    /// Quick pick cities (keys 1-9)
    #[debug(section = "Search", label = "Examples", debug_fmt)]
    pub examples: Vec<String>,

    // --- Animation internals (skipped) ---
    /// Spinner frame counter, reset on each submission
    #[debug(skip)]
    pub tick_count: u32,

    // --- Search overlay (skipped) ---
    /// Whether the search overlay is open
    #[debug(skip)]
    pub search_mode: bool,

    /// Text currently typed into the overlay
    #[debug(skip)]
    pub search_query: String,
}

impl AppState {
    pub fn new(examples: Vec<String>) -> Self {
        Self {
            display: DisplayState::Idle,
            last_city: None,
            examples,
            tick_count: 0,
            search_mode: false,
            search_query: String::new(),
        }
    }

    /// The search control is disabled while a request is outstanding.
    pub fn can_submit(&self) -> bool {
        !self.display.is_loading()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_EXAMPLES.iter().map(|city| city.to_string()).collect())
    }
}
