//! HTTP plumbing for the Notion API.
//!
//! One blocking client per invocation. Every request carries the bearer
//! token and the pinned `Notion-Version` header; non-2xx responses are
//! mapped to typed errors, with `object_not_found` distinguished so the
//! dispatcher can suggest sharing the resource with the integration.

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// API revision this tool is written against.
pub(crate) const NOTION_VERSION: &str = "2022-06-28";

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";

pub(crate) struct HttpClient {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpClient {
    pub(crate) fn new(token: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            token,
        }
    }

    pub(crate) fn get(&self, endpoint: &str) -> Result<Value> {
        self.execute(self.client.get(self.url(endpoint)))
    }

    pub(crate) fn post(&self, endpoint: &str, body: &Value) -> Result<Value> {
        self.execute(self.client.post(self.url(endpoint)).json(body))
    }

    pub(crate) fn patch(&self, endpoint: &str, body: &Value) -> Result<Value> {
        self.execute(self.client.patch(self.url(endpoint)).json(body))
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn execute(&self, request: RequestBuilder) -> Result<Value> {
        let response = request
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Notion-Version", NOTION_VERSION)
            .send()
            .map_err(transport_error)?;
        parse_json_response(response)
    }
}

fn transport_error(e: reqwest::Error) -> Error {
    Error::remote_request_failed(e.to_string())
}

/// Error body shape the API returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

fn api_error(status: u16, body: &str) -> Error {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or(ApiErrorBody {
        code: None,
        message: None,
    });

    if parsed.code.as_deref() == Some("object_not_found") {
        let message = parsed
            .message
            .unwrap_or_else(|| "Resource not found or not shared with the integration".to_string());
        return Error::remote_not_found(message);
    }

    let message = match &parsed.message {
        Some(message) => format!("API error: HTTP {}: {}", status, message),
        None => format!("API error: HTTP {}", status),
    };
    Error::remote_api_error(status, parsed.code, message, Some(truncate(body, 500)))
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn parse_json_response(response: Response) -> Result<Value> {
    let status = response.status();
    let body = response.text().map_err(transport_error)?;

    if !status.is_success() {
        return Err(api_error(status.as_u16(), &body));
    }

    serde_json::from_str(&body)
        .map_err(|e| Error::internal_json(format!("Invalid JSON response: {}", e), None))
}
