//! Effects - side effects declared by the reducer

use crate::action::Action;
use crate::api::WeatherBackend;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Look up current weather for an already-trimmed city name
    FetchWeather { city: String },
}

/// Run one fetch and turn its outcome into the action that ends `Loading`.
///
/// Every outcome maps to exactly one of `WeatherDidLoad` or `WeatherDidError`.
pub async fn resolve_fetch(backend: &dyn WeatherBackend, city: &str) -> Action {
    match backend.fetch_weather(city).await {
        Ok(result) => {
            tracing::info!(city, cached = result.cached, "weather loaded");
            Action::WeatherDidLoad(result)
        }
        Err(err) => {
            tracing::warn!(city, error = %err, "weather fetch failed");
            Action::WeatherDidError(err.to_string())
        }
    }
}
