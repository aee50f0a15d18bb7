use clap::Args;
use serde::Serialize;
use serde_json::Value;

use notionctl::notion::{self, NotionClient};
use notionctl::{ident, token};

use super::CmdResult;

#[derive(Args)]
pub struct GetDatabaseArgs {
    /// Database ID (hyphenated or not)
    pub id: String,
}

#[derive(Serialize)]
pub struct GetDatabaseOutput {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Raw property schema, untouched
    pub properties: Value,
}

pub fn run(args: GetDatabaseArgs) -> CmdResult<GetDatabaseOutput> {
    let client = NotionClient::new(token::load()?);
    let id = ident::normalize(&args.id);
    notionctl::log_status!("database", "Fetching schema for database {}", id);

    let database = client.retrieve_database(&id)?;

    Ok((
        GetDatabaseOutput {
            id: database
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or(&id)
                .to_string(),
            title: notion::entity_title(&database),
            url: database
                .get("url")
                .and_then(Value::as_str)
                .map(str::to_string),
            properties: database.get("properties").cloned().unwrap_or(Value::Null),
        },
        0,
    ))
}
