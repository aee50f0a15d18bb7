use clap::Args;
use serde::Serialize;
use serde_json::Value;

use notionctl::notion::{self, NotionClient};
use notionctl::token;

use super::CmdResult;

#[derive(Args)]
pub struct SearchArgs {
    /// Search query
    pub query: String,
}

#[derive(Serialize)]
pub struct SearchMatch {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub object: String,
}

pub fn run(args: SearchArgs) -> CmdResult<Vec<SearchMatch>> {
    let client = NotionClient::new(token::load()?);
    notionctl::log_status!("search", "Searching workspace for \"{}\"", args.query);

    let results = client.search(Some(&args.query), 20)?;

    let matches = results
        .iter()
        .map(|item| SearchMatch {
            id: item
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            title: notion::entity_title(item),
            url: item
                .get("url")
                .and_then(Value::as_str)
                .map(str::to_string),
            object: item
                .get("object")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string(),
        })
        .collect();

    Ok((matches, 0))
}
