use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::area;
use crate::config::WeatherConfig;
use crate::forecast;
use crate::models::GetForecastRequest;

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    config: WeatherConfig,
    tool_router: ToolRouter<Self>,
}

impl Default for Weather {
    fn default() -> Self {
        Self::new(WeatherConfig::default())
    }
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// Names of the registered tools
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-jpn-weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Japanese weather forecasts from the Tsukumijima forecast API. \
                Use get_area_codes to look up a location code, then get_forecast."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets the forecast for a Japanese primary subdivision area
    #[tool(description = "Get weather forecast for a Japan location. Provide the primary subdivision area code used by the JMA forecast (e.g., 270000 for Osaka). Codes are listed at https://weather.tsukumijima.net/primary_area.xml or via get_area_codes.")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting forecast for location code: {}", request.location_code);

        let text = forecast::get_forecast(&self.config, &request.location_code).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Lists every prefecture, city and area code
    #[tool(description = "List all Japanese forecast area codes as 'prefecture - city: code' lines.")]
    async fn get_area_codes(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting area codes");

        let text = area::get_area_codes(&self.config).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_both_tools() {
        let mut names = Weather::default().tool_names();
        names.sort();
        assert_eq!(names, ["get_area_codes", "get_forecast"]);
    }

    #[test]
    fn info_advertises_tools() {
        let info = Weather::default().get_info();
        assert!(info.capabilities.tools.is_some());
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }
}
