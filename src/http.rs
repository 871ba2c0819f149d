use reqwest::{header::ACCEPT, Client};
use serde::de::DeserializeOwned;

use crate::config::WeatherConfig;
use crate::constants::FORECAST_ACCEPT;
use crate::error::{FetchError, Result};

/// Builds the client for one call. It is dropped when the calling
/// function returns, whichever path it returns through.
fn build_client(config: &WeatherConfig) -> Result<Client> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .build()
        .map_err(|e| FetchError::Unexpected(format!("failed to build HTTP client: {}", e)))
}

/// Query parameters appended to a request URL, encoded by reqwest
pub type Query<'a> = &'a [(&'a str, &'a str)];

async fn get_body(
    client: &Client,
    url: &str,
    query: Query<'_>,
    accept: Option<&str>,
) -> Result<String> {
    tracing::debug!(url, ?query, "GET");

    let mut request = client.get(url).query(query);
    if let Some(accept) = accept {
        request = request.header(ACCEPT, accept);
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(url, %status, error = %e, "Failed to read error response body");
                String::new()
            }
        };
        return Err(FetchError::Status { status, body });
    }

    Ok(response.text().await?)
}

async fn try_fetch_json<T: DeserializeOwned>(
    config: &WeatherConfig,
    url: &str,
    query: Query<'_>,
) -> Result<T> {
    let client = build_client(config)?;
    let body = get_body(&client, url, query, Some(FORECAST_ACCEPT)).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Makes an HTTP GET request and decodes the JSON body.
///
/// Every failure is logged and collapsed into `None`.
pub async fn fetch_json<T: DeserializeOwned>(
    config: &WeatherConfig,
    url: &str,
    query: Query<'_>,
) -> Option<T> {
    match try_fetch_json(config, url, query).await {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::warn!(url, ?query, error = %e, "JSON request failed");
            None
        }
    }
}

/// Makes an HTTP GET request and returns the body text, keeping the
/// failure category for the caller.
pub async fn fetch_text(config: &WeatherConfig, url: &str) -> Result<String> {
    let client = build_client(config)?;
    get_body(&client, url, &[], None).await
}
