//! Backend weather API client

use async_trait::async_trait;
use serde_json::Value;

use crate::state::WeatherResult;

/// Fetch failure. `Display` is the message shown to the user.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Non-2xx response; `message` is already extracted from the body
    #[error("{message}")]
    Status { status: u16, message: String },
    /// Connection-level failure
    #[error("{0}")]
    Request(String),
    /// 2xx response whose body is not a weather report
    #[error("{0}")]
    Decode(String),
}

/// Anything that can answer a city lookup
#[async_trait]
pub trait WeatherBackend: Send + Sync {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResult, FetchError>;
}

/// Build `GET {base}/api/weather?city=...` with the city percent-encoded.
pub fn weather_url(base_url: &str, city: &str) -> String {
    format!(
        "{}/api/weather?city={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(city)
    )
}

/// Pick the message for a failed response.
///
/// A non-empty string `error` field in a JSON body wins; anything else falls
/// back to the generic status message.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(Value::as_str)
                .filter(|msg| !msg.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("HTTP error! status: {}", status))
}

/// reqwest-backed client for the weather backend
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl WeatherBackend for HttpBackend {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResult, FetchError> {
        let url = weather_url(&self.base_url, city);
        tracing::debug!(%url, "requesting weather");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body just means no server-supplied message.
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}
