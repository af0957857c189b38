use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const READ_METHODS: &str = "GET,POST,OPTIONS";
pub const WRITE_METHODS: &str = "POST,OPTIONS,GET";
pub const MALFORMED_WRITE_METHODS: &str = "POST";

/// API Gateway proxy integration response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ApiGatewayResponse {
    /// Builds a response carrying the CORS headers every browser caller needs.
    pub fn with_cors(status_code: u16, allowed_methods: &str, body: impl Into<String>) -> Self {
        Self {
            status_code,
            headers: cors_headers(allowed_methods),
            body: body.into(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

fn cors_headers(allowed_methods: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        (
            "Access-Control-Allow-Methods".to_string(),
            allowed_methods.to_string(),
        ),
        (
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type".to_string(),
        ),
    ])
}
