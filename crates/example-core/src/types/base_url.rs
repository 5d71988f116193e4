//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidConfigError};

/// A validated API base URL.
///
/// This type ensures the URL is absolute, uses HTTP or HTTPS, has a host,
/// and can have endpoint paths appended to it.
///
/// # Example
///
/// ```
/// use example_core::BaseUrl;
///
/// let base = BaseUrl::new("https://api.example.com/v1/").unwrap();
/// assert_eq!(base.endpoint("items").as_str(), "https://api.example.com/v1/items");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Production API endpoint used when no base URL is configured.
    pub const DEFAULT: &'static str = "https://api.example.com";

    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the URL does not parse or is not
    /// an absolute HTTP(S) URL.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| invalid(s, e.to_string()))?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the URL for an endpoint path below this base.
    ///
    /// A trailing slash on the base is ignored, so `https://host/` and
    /// `https://host` both yield `https://host/items`.
    pub fn endpoint(&self, path: &str) -> Url {
        let mut url = self.0.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path.split('/'));
        }
        url
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(invalid(original, "must be an absolute URL"));
        }

        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(original, "must use http or https"));
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(invalid(original, "must have a host"));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid(original, "must not contain a query or fragment"));
        }

        Ok(())
    }
}

fn invalid(value: &str, reason: impl Into<String>) -> Error {
    InvalidConfigError::BaseUrl {
        value: value.to_string(),
        reason: reason.into(),
    }
    .into()
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(Url::parse(Self::DEFAULT).expect("default base URL is valid"))
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BaseUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
