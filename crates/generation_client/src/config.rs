//! Configuration for the generation endpoint connection.

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8081";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct GenerationEndpointConfig {
    /// Base URL of the inference server, without a trailing slash.
    pub base_url: String,
    /// Whole-request timeout for non-streaming calls.
    pub request_timeout: Duration,
}

/// Load the endpoint configuration from environment variables.
///
/// Environment variables:
/// - `GENERATION_BASE_URL`: inference server base URL (default: `http://127.0.0.1:8081`)
/// - `GENERATION_TIMEOUT_SECS`: request timeout in seconds (default: 120)
pub fn load_generation_endpoint_config() -> GenerationEndpointConfig {
    GenerationEndpointConfig {
        base_url: std::env::var("GENERATION_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string(),
        request_timeout: Duration::from_secs(
            std::env::var("GENERATION_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = load_generation_endpoint_config();
        assert!(!config.base_url.is_empty());
        assert!(!config.base_url.ends_with('/'));
        assert!(config.request_timeout.as_secs() > 0);
    }
}
