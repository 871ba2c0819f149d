use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Tsukumijima Forecast API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub description: Description,
    pub forecasts: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
pub struct Description {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ForecastEntry {
    pub date: String,
    pub detail: ForecastDetail,
    pub temperature: TemperatureRange,
}

/// Upstream sends `null` for `wave` in inland areas, and occasionally for
/// the other fields as well.
#[derive(Debug, Deserialize)]
pub struct ForecastDetail {
    pub weather: Option<String>,
    pub wind: Option<String>,
    pub wave: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TemperatureRange {
    pub min: TemperatureValue,
    pub max: TemperatureValue,
}

#[derive(Debug, Deserialize)]
pub struct TemperatureValue {
    pub celsius: Option<Celsius>,
}

/// Upstream encodes temperatures as strings (`"5"`); plain numbers are
/// accepted too.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Celsius {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Celsius::Text(text) => f.write_str(text),
            Celsius::Number(number) => write!(f, "{}", number),
        }
    }
}

// ============================================================================
// Area Directory Models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaEntry {
    pub prefecture: String,
    pub city: String,
    pub code: String,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

/// Area code from the primary subdivision table, e.g. `270000` for Osaka.
/// Accepted as a number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum LocationCode {
    Number(u64),
    Text(String),
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationCode::Number(code) => write!(f, "{}", code),
            LocationCode::Text(code) => f.write_str(code),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    /// Primary subdivision area code (see https://weather.tsukumijima.net/primary_area.xml)
    #[serde(alias = "city_code")]
    pub location_code: LocationCode,
}
