//! Typed operations against the Notion API.
//!
//! [`NotionClient`] wraps the HTTP layer with one method per remote
//! operation, returning either typed projections or raw payloads where the
//! caller renders the entity as-is (page bodies, database schemas).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::{Error, Result};
use crate::http::{HttpClient, DEFAULT_BASE_URL};
use crate::props::PropertyValue;

pub struct NotionClient {
    http: HttpClient,
}

/// Identity fields of a created or updated page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRef {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub last_edited_time: Option<String>,
}

/// A database row as returned by a query, with typed properties.
#[derive(Debug, Deserialize)]
pub struct PageEntry {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl NotionClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(token.into(), base_url.into()),
        }
    }

    /// Searches the workspace. `query: None` lists whatever the integration
    /// can see, most recently edited first.
    pub fn search(&self, query: Option<&str>, page_size: u32) -> Result<Vec<Value>> {
        let mut body = json!({ "page_size": page_size });
        if let Some(query) = query {
            body["query"] = json!(query);
        }
        let response = self.http.post("/search", &body)?;
        list_results(response)
    }

    pub fn retrieve_page(&self, page_id: &str) -> Result<Value> {
        self.http.get(&format!("/pages/{}", page_id))
    }

    pub fn list_block_children(&self, block_id: &str, page_size: u32) -> Result<Vec<Value>> {
        let response = self
            .http
            .get(&format!("/blocks/{}/children?page_size={}", block_id, page_size))?;
        list_results(response)
    }

    pub fn create_page(&self, database_id: &str, properties: Map<String, Value>) -> Result<PageRef> {
        let body = json!({
            "parent": { "database_id": database_id },
            "properties": properties,
        });
        let response = self.http.post("/pages", &body)?;
        decode("page", response)
    }

    pub fn update_page(&self, page_id: &str, properties: Map<String, Value>) -> Result<PageRef> {
        let body = json!({ "properties": properties });
        let response = self.http.patch(&format!("/pages/{}", page_id), &body)?;
        decode("page", response)
    }

    pub fn retrieve_database(&self, database_id: &str) -> Result<Value> {
        self.http.get(&format!("/databases/{}", database_id))
    }

    pub fn query_database(
        &self,
        database_id: &str,
        filter: Option<Value>,
        page_size: u32,
    ) -> Result<Vec<PageEntry>> {
        let mut body = json!({ "page_size": page_size });
        if let Some(filter) = filter {
            body["filter"] = filter;
        }
        let response = self
            .http
            .post(&format!("/databases/{}/query", database_id), &body)?;
        let results = list_results(response)?;
        results
            .into_iter()
            .map(|entry| decode("query result", entry))
            .collect()
    }
}

/// Pulls the `results` array out of a list response.
fn list_results(response: Value) -> Result<Vec<Value>> {
    match response.get("results").and_then(Value::as_array) {
        Some(results) => Ok(results.clone()),
        None => Err(Error::internal_json(
            "Response has no 'results' array".to_string(),
            Some("list response".to_string()),
        )),
    }
}

fn decode<T: serde::de::DeserializeOwned>(what: &str, value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| Error::internal_json(e.to_string(), Some(format!("decode {}", what))))
}

/// Best-effort display title for a search result, page, or database.
///
/// Databases carry a top-level `title` fragment array; pages carry their
/// title inside the title-kind property. Empty either way means "Untitled".
pub fn entity_title(entity: &Value) -> String {
    if let Some(fragments) = entity.get("title").and_then(Value::as_array) {
        let title = concat_raw_fragments(fragments);
        if !title.is_empty() {
            return title;
        }
    }

    if let Some(props) = entity.get("properties").and_then(Value::as_object) {
        for value in props.values() {
            if value.get("type").and_then(Value::as_str) == Some("title") {
                if let Some(fragments) = value.get("title").and_then(Value::as_array) {
                    let title = concat_raw_fragments(fragments);
                    if !title.is_empty() {
                        return title;
                    }
                }
            }
        }
    }

    "Untitled".to_string()
}

fn concat_raw_fragments(fragments: &[Value]) -> String {
    fragments
        .iter()
        .map(|fragment| {
            fragment
                .pointer("/text/content")
                .or_else(|| fragment.get("plain_text"))
                .and_then(Value::as_str)
                .unwrap_or("")
        })
        .collect()
}
