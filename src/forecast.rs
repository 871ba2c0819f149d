use crate::config::WeatherConfig;
use crate::formatters::{forecast_failure_text, format_forecast};
use crate::http;
use crate::models::{ForecastResponse, LocationCode};

/// Fetches the forecast for one location code and renders it.
///
/// Any failure yields the fixed "unable to fetch" text.
pub async fn get_forecast(config: &WeatherConfig, location_code: &LocationCode) -> String {
    let code = location_code.to_string();
    let query = [("city", code.as_str())];

    match http::fetch_json::<ForecastResponse>(config, &config.forecast_api_base, &query).await {
        Some(forecast) => format_forecast(&forecast),
        None => forecast_failure_text(),
    }
}
