//! MCP server exposing Japanese weather forecasts and the area code
//! directory from weather.tsukumijima.net.

pub mod area;
pub mod config;
pub mod constants;
pub mod error;
pub mod forecast;
pub mod formatters;
pub mod http;
pub mod models;
pub mod service;

pub use config::WeatherConfig;
pub use service::Weather;
