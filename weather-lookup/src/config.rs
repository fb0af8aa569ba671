//! Runtime configuration resolved from flags, environment and defaults

use std::path::PathBuf;

use crate::state::DEFAULT_EXAMPLES;

/// Environment variable consulted when `--api-url` is not given
pub const API_URL_ENV: &str = "WEATHER_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_LOG_DIR: &str = ".logs";

#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    /// Backend base URL, without trailing slash
    pub api_url: String,
    /// Searched once at startup, as if typed
    pub initial_city: Option<String>,
    pub examples: Vec<String>,
    pub log_dir: PathBuf,
}

impl RuntimeConfig {
    /// Flag beats environment beats default. Blank values count as unset.
    pub fn resolve(
        api_url_flag: Option<String>,
        api_url_env: Option<String>,
        initial_city: Option<String>,
        examples: Vec<String>,
        log_dir: Option<PathBuf>,
    ) -> Self {
        let api_url = api_url_flag
            .filter(|url| !url.trim().is_empty())
            .or_else(|| api_url_env.filter(|url| !url.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let mut examples: Vec<String> = examples
            .iter()
            .map(|city| city.trim())
            .filter(|city| !city.is_empty())
            .map(str::to_string)
            .collect();
        if examples.is_empty() {
            examples = DEFAULT_EXAMPLES.iter().map(|city| city.to_string()).collect();
        }

        Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            initial_city: initial_city.filter(|city| !city.is_empty()),
            examples,
            log_dir: log_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
        }
    }

    pub fn from_env(
        api_url_flag: Option<String>,
        initial_city: Option<String>,
        examples: Vec<String>,
        log_dir: Option<PathBuf>,
    ) -> Self {
        Self::resolve(
            api_url_flag,
            std::env::var(API_URL_ENV).ok(),
            initial_city,
            examples,
            log_dir,
        )
    }
}
