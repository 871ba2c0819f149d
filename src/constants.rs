use std::time::Duration;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-app/1.0";

/// Accept header sent to the forecast endpoint
pub const FORECAST_ACCEPT: &str = "application/geo+json";

/// Tsukumijima forecast API base URL
pub const FORECAST_API_BASE: &str = "https://weather.tsukumijima.net/api/forecast";

/// Directory of primary subdivision area codes
pub const AREA_DIRECTORY_URL: &str = "https://weather.tsukumijima.net/primary_area.xml";

/// Upper bound on a single outbound request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Returned by the forecast tool for every failure
pub const FORECAST_UNAVAILABLE: &str = "Unable to fetch detailed forecast.";

/// Returned by the area tool when the directory holds no cities
pub const AREA_NOT_FOUND: &str = "エリア情報が見つかりませんでした。";

/// Rendered in place of a null upstream value
pub const MISSING_VALUE: &str = "-";
