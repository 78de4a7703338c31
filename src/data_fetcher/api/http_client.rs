//! HTTP client creation and configuration utilities

use crate::config::Config;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::time::Duration;

/// Creates a configured HTTP client with connection pooling, timeout
/// handling and the service authentication headers attached as defaults.
///
/// Every request carries `x-rapidapi-key` and `x-rapidapi-host` from the
/// configuration, so call sites never touch credentials.
pub fn create_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Ok(value) = HeaderValue::from_str(&config.api_key) {
        headers.insert("x-rapidapi-key", value);
    }
    if let Ok(value) = HeaderValue::from_str(&config.api_host) {
        headers.insert("x-rapidapi-host", value);
    }

    Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .default_headers(headers)
        .build()
}

/// Creates an HTTP client for testing against a mock server.
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    let config = Config {
        api_key: "test-key".to_string(),
        ..Config::default()
    };
    create_http_client(&config).expect("Failed to create test HTTP client")
}
