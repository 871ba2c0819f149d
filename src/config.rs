use std::time::Duration;

use crate::constants::{AREA_DIRECTORY_URL, FORECAST_API_BASE, REQUEST_TIMEOUT, USER_AGENT};

/// Endpoints and request settings used by the fetchers.
///
/// The default points at the public Tsukumijima service. Nothing is read
/// from the environment; callers that need another host build the value
/// themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherConfig {
    pub forecast_api_base: String,
    pub area_directory_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            forecast_api_base: FORECAST_API_BASE.to_string(),
            area_directory_url: AREA_DIRECTORY_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl WeatherConfig {
    /// Routes both endpoints to `base`, keeping the upstream paths.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            forecast_api_base: format!("{}/api/forecast", base),
            area_directory_url: format!("{}/primary_area.xml", base),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
