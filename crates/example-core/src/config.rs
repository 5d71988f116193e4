//! Client configuration.

use serde::Deserialize;

use crate::Result;
use crate::types::{ApiKey, BaseUrl};

/// How response status codes are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Decode any response that carries a body, whatever its status.
    #[default]
    Ignore,
    /// Report non-2xx responses as [`crate::Error::Status`].
    RequireSuccess,
}

/// Immutable settings shared by every request a client makes.
///
/// Can be embedded in an application's own configuration file:
///
/// ```
/// use example_core::ClientConfig;
///
/// let config: ClientConfig = serde_json::from_str(r#"{
///     "api_key": "secret",
///     "base_url": "https://staging.example.com"
/// }"#).unwrap();
/// assert_eq!(config.base_url().host(), Some("staging.example.com"));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    api_key: ApiKey,
    #[serde(default)]
    base_url: BaseUrl,
    #[serde(default)]
    status_policy: StatusPolicy,
}

impl ClientConfig {
    /// Create a configuration for the default production base URL.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BaseUrl::default(),
            status_policy: StatusPolicy::default(),
        }
    }

    /// Create a configuration for a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfig`] if `base_url` is not a valid
    /// absolute HTTP(S) URL.
    pub fn with_base_url(api_key: impl Into<ApiKey>, base_url: &str) -> Result<Self> {
        Ok(Self {
            api_key: api_key.into(),
            base_url: BaseUrl::new(base_url)?,
            status_policy: StatusPolicy::default(),
        })
    }

    /// Set the status policy.
    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }
}
