//! Configuration value types.
//!
//! These types enforce their invariants at construction time, so a client
//! can never hold a malformed base URL.

mod api_key;
mod base_url;

pub use api_key::ApiKey;
pub use base_url::BaseUrl;
