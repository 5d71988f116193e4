//! example-http - Network transport for the Example API SDK.
//!
//! Supplies [`ReqwestTransport`] and constructors that wire it into an
//! [`ExampleClient`].
//!
//! # Example
//!
//! ```no_run
//! # async fn example() -> example_http::Result<()> {
//! let client = example_http::client("my-api-key", "https://api.example.com")?;
//!
//! let items = client.fetch_items().await?;
//! for item in &items {
//!     println!("{item}");
//! }
//!
//! let reply = client.submit_item("new item").await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

mod transport;

pub use transport::{ReqwestTransport, ReqwestTransportBuilder, USER_AGENT};

pub use example_core::{
    ApiKey, BaseUrl, ClientConfig, Error, ExampleClient, Result, StatusPolicy, TransportError,
};

/// Client type using the default network transport.
pub type HttpClient = ExampleClient<ReqwestTransport>;

/// Create a client for `base_url` with a default [`ReqwestTransport`].
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] for a malformed base URL, or
/// [`Error::Network`] if the HTTP client cannot be initialized.
pub fn client(api_key: impl Into<ApiKey>, base_url: &str) -> Result<HttpClient> {
    let config = ClientConfig::with_base_url(api_key, base_url)?;
    client_from_config(config)
}

/// Create a client from a prepared configuration.
pub fn client_from_config(config: ClientConfig) -> Result<HttpClient> {
    let transport = ReqwestTransport::new()?;
    Ok(ExampleClient::from_config(transport, config))
}
