use clap::Args;
use serde::Serialize;

use notionctl::notion::NotionClient;
use notionctl::{ident, json, props, token};

use super::CmdResult;

#[derive(Args)]
pub struct AddEntryArgs {
    /// Database ID (hyphenated or not)
    pub id: String,

    /// Title for the new entry
    #[arg(long)]
    pub title: Option<String>,

    /// Additional properties in Notion's native shape (inline JSON, @file, or - for stdin)
    #[arg(long, value_name = "JSON")]
    pub properties: Option<String>,

    /// Name of the database's title property
    #[arg(long, value_name = "NAME", default_value = props::DEFAULT_TITLE_PROPERTY)]
    pub title_property: String,
}

#[derive(Serialize)]
pub struct AddEntryOutput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

pub fn run(args: AddEntryArgs) -> CmdResult<AddEntryOutput> {
    let extra = args
        .properties
        .as_deref()
        .map(json::read_json_spec_to_string)
        .transpose()?;
    let properties = props::build_properties(
        args.title.as_deref(),
        extra.as_deref(),
        &args.title_property,
    )?;

    let client = NotionClient::new(token::load()?);
    let id = ident::normalize(&args.id);
    notionctl::log_status!("add", "Creating entry in database {}", id);

    let page = client.create_page(&id, properties)?;

    Ok((
        AddEntryOutput {
            id: page.id,
            url: page.url,
            created: page.created_time,
        },
        0,
    ))
}
