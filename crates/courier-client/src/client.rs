//! HTTP client for the Techfix API
//!
//! This module provides the request/response types, error handling, client
//! configuration, and the reqwest-backed [`ApiClient`]. The courier list read
//! is exposed through the [`CourierSource`] trait so state controllers can be
//! driven by a fake in tests.

use crate::types::{CourierFilter, CourierListResponse};
use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Response as ReqwestResponse};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// Errors raised while talking to the Techfix API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The request exceeded the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The response body could not be read or decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status code, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure happened below HTTP (connection, timeout)
    pub fn is_network_error(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Timeout(_))
    }
}

// =============================================================================
// Request Types
// =============================================================================

/// A read request against the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Path relative to the base URL (e.g., "couriers/")
    pub path: String,
    /// Query parameters
    pub params: BTreeMap<String, String>,
}

impl ApiRequest {
    /// Create a new GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: BTreeMap::new(),
        }
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// Build the courier list request for a filter
///
/// `status` is the only query parameter and is omitted for
/// [`CourierFilter::All`].
pub fn courier_list_request(path: &str, filter: CourierFilter) -> ApiRequest {
    let request = ApiRequest::get(path);
    match filter.status_param() {
        Some(status) => request.param("status", status),
        None => request,
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// Decoded API response
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status code
    pub status: u16,
    /// Response data
    pub data: T,
}

// =============================================================================
// Client Configuration
// =============================================================================

/// Environment variable holding the API base URL
pub const ENV_API_URL: &str = "TECHFIX_API_URL";
/// Environment variable holding an optional bearer token
pub const ENV_API_TOKEN: &str = "TECHFIX_API_TOKEN";
/// Environment variable holding the request timeout in seconds
pub const ENV_API_TIMEOUT_SECS: &str = "TECHFIX_API_TIMEOUT_SECS";

/// Default courier list path
pub const DEFAULT_COURIERS_PATH: &str = "couriers/";

/// Configuration for [`ApiClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    /// Base API URL (e.g., "https://api.techfix.example/api")
    pub base_url: String,
    /// Courier list path relative to the base URL
    pub couriers_path: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Headers sent with every request
    pub default_headers: BTreeMap<String, String>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            couriers_path: DEFAULT_COURIERS_PATH.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("Techfix-Couriers/{}", env!("CARGO_PKG_VERSION")),
            default_headers: BTreeMap::new(),
        }
    }
}

impl ApiClientConfig {
    /// Create a new config with a base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Build a config from `TECHFIX_API_URL`, `TECHFIX_API_TOKEN` and
    /// `TECHFIX_API_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let base_url = lookup(ENV_API_URL)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ApiError::Config(format!("{} is not set", ENV_API_URL)))?;

        let mut config = Self::new(base_url);

        if let Some(raw) = lookup(ENV_API_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                ApiError::Config(format!("{} must be whole seconds, got {:?}", ENV_API_TIMEOUT_SECS, raw))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        if let Some(token) = lookup(ENV_API_TOKEN).filter(|t| !t.is_empty()) {
            config = config.with_bearer_token(token);
        }

        Ok(config)
    }

    /// Set the courier list path
    pub fn with_couriers_path(mut self, path: impl Into<String>) -> Self {
        self.couriers_path = path.into();
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a default header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Send `Authorization: Bearer <token>` with every request
    pub fn with_bearer_token(self, token: impl AsRef<str>) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        self.with_header("Authorization", value)
    }

    /// Join the base URL and a relative path
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

// =============================================================================
// Error Response Format
// =============================================================================

/// Error body some endpoints return alongside non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "detail")]
    message: Option<String>,
}

// =============================================================================
// Courier Source
// =============================================================================

/// Remote read capability for the courier list
#[async_trait]
pub trait CourierSource: Send + Sync {
    /// Fetch the courier list, restricted to `filter`
    async fn list_couriers(&self, filter: CourierFilter) -> Result<CourierListResponse, ApiError>;
}

// =============================================================================
// API Client
// =============================================================================

/// Client for the Techfix REST API
///
/// # Examples
/// ```
/// use courier_client::{ApiClient, ApiClientConfig, CourierFilter, CourierSource};
///
/// async fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ApiClient::new(ApiClientConfig::new("https://api.techfix.example/api"))?;
///     let response = client.list_couriers(CourierFilter::InTransit).await?;
///     println!("{} couriers", response.data.unwrap_or_default().len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: ReqwestClient,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiError> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Make a GET request and decode the JSON body
    pub async fn get<T>(&self, request: ApiRequest) -> Result<ApiResponse<T>, ApiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = self.config.url_for(&request.path);
        let mut req = self.client.get(&url);

        if !request.params.is_empty() {
            req = req.query(&request.params);
        }

        for (key, value) in &self.config.default_headers {
            req = req.header(key, value);
        }

        tracing::debug!(url = %url, params = ?request.params, "GET");

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout(self.config.timeout)
            } else {
                ApiError::Network(format!("Request failed: {}", e))
            }
        })?;

        self.parse_response(response).await
    }

    async fn parse_response<T>(&self, response: ReqwestResponse) -> Result<ApiResponse<T>, ApiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let body = match serde_json::from_str::<ErrorBody>(&error_body) {
                Ok(ErrorBody {
                    message: Some(message),
                }) => message,
                _ => error_body,
            };
            return Err(ApiError::Status { status, body });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout(self.config.timeout)
            } else {
                ApiError::Decode(format!("Failed to read response: {}", e))
            }
        })?;

        let data: T = serde_json::from_str(&body)
            .map_err(|e| ApiError::Decode(format!("Failed to parse JSON: {}", e)))?;

        tracing::debug!(status, "Response decoded");
        Ok(ApiResponse { status, data })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl CourierSource for ApiClient {
    async fn list_couriers(&self, filter: CourierFilter) -> Result<CourierListResponse, ApiError> {
        let request = courier_list_request(&self.config.couriers_path, filter);
        let response = self.get::<CourierListResponse>(request).await?;
        Ok(response.data)
    }
}

// =============================================================================
// Tests
// =============================================================================
