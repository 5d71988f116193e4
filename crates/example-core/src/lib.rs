//! example-core - Client SDK core for the Example API.
//!
//! Provides the [`ExampleClient`], its configuration types, and the
//! [`Transport`] trait it sends requests through. This crate performs no
//! network I/O itself; `example-http` supplies a `reqwest`-backed transport.
//!
//! # Example
//!
//! ```no_run
//! use example_core::{ExampleClient, HttpRequest, HttpResponse, Transport, TransportError};
//!
//! struct MyTransport;
//!
//! #[async_trait::async_trait]
//! impl Transport for MyTransport {
//!     async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
//!         // hand the request to your HTTP stack of choice
//!         # let _ = request;
//!         Ok(HttpResponse::ok(r#"["a","b"]"#))
//!     }
//! }
//!
//! # async fn example() -> example_core::Result<()> {
//! let client = ExampleClient::with_base_url(MyTransport, "my-api-key", "https://api.example.com")?;
//! let items = client.fetch_items().await?;
//! let reply = client.submit_item("new item").await?;
//! # let _ = (items, reply);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod transport;
pub mod types;

pub use client::ExampleClient;
pub use config::{ClientConfig, StatusPolicy};
pub use error::{BoxError, Error, InvalidConfigError, TransportError};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::{ApiKey, BaseUrl};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
