//! Endpoint paths and request/response bodies.

use serde::Serialize;

/// GET, returns a JSON array of strings.
pub const ITEMS: &str = "items";

/// POST, returns plain UTF-8 text.
pub const SUBMIT: &str = "submit";

/// Request body for submit.
#[derive(Debug, Serialize)]
pub struct SubmitItemRequest<'a> {
    pub item: &'a str,
}

/// Response from items.
pub type ItemsResponse = Vec<String>;
