use clap::Args;
use serde::Serialize;
use serde_json::{Map, Value};

use notionctl::notion::NotionClient;
use notionctl::{ident, json, token, Error};

use super::CmdResult;

#[derive(Args)]
pub struct UpdatePageArgs {
    /// Page ID (hyphenated or not)
    pub id: String,

    /// Properties to update, in Notion's native shape (inline JSON, @file, or - for stdin).
    /// Required; validated in the handler, not by clap.
    #[arg(long, value_name = "JSON")]
    pub properties: Option<String>,
}

#[derive(Serialize)]
pub struct UpdatePageOutput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_edited: Option<String>,
}

pub fn run(args: UpdatePageArgs) -> CmdResult<UpdatePageOutput> {
    let spec = require_properties(args.properties.as_deref())?;
    let raw = json::read_json_spec_to_string(spec)?;
    let properties: Map<String, Value> = serde_json::from_str(&raw)
        .map_err(|e| Error::validation_invalid_json(e, Some("parse --properties".to_string())))?;

    let client = NotionClient::new(token::load()?);
    let id = ident::normalize(&args.id);
    notionctl::log_status!("update", "Updating page {}", id);

    let page = client.update_page(&id, properties)?;

    Ok((
        UpdatePageOutput {
            id: page.id,
            url: page.url,
            last_edited: page.last_edited_time,
        },
        0,
    ))
}

fn require_properties(spec: Option<&str>) -> notionctl::Result<&str> {
    spec.ok_or_else(|| Error::validation_missing_argument(vec!["--properties".to_string()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notionctl::ErrorCode;

    #[test]
    fn missing_properties_is_reported_before_any_remote_call() {
        let err = require_properties(None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationMissingArgument);
    }

    #[test]
    fn present_properties_pass_through() {
        assert_eq!(require_properties(Some("{}")).unwrap(), "{}");
    }
}
