use std::collections::BTreeMap;

use clap::Args;
use serde::Serialize;
use serde_json::Value;

use notionctl::notion::NotionClient;
use notionctl::props::{self, SimplifiedValue};
use notionctl::{ident, json, token, Error};

use super::CmdResult;

#[derive(Args)]
pub struct QueryDatabaseArgs {
    /// Database ID (hyphenated or not)
    pub id: String,

    /// Filter in Notion's native query-filter shape (inline JSON, @file, or - for stdin)
    #[arg(long, value_name = "JSON")]
    pub filter: Option<String>,
}

#[derive(Serialize)]
pub struct QueryEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    pub properties: BTreeMap<String, SimplifiedValue>,
}

pub fn run(args: QueryDatabaseArgs) -> CmdResult<Vec<QueryEntry>> {
    // Parse the filter before anything touches the network
    let filter = args.filter.as_deref().map(parse_filter).transpose()?;

    let client = NotionClient::new(token::load()?);
    let id = ident::normalize(&args.id);
    notionctl::log_status!("query", "Querying database {}", id);

    let entries = client.query_database(&id, filter, 100)?;

    let rows = entries
        .into_iter()
        .map(|entry| QueryEntry {
            id: entry.id,
            url: entry.url,
            created: entry.created_time,
            properties: props::simplify(&entry.properties),
        })
        .collect();

    Ok((rows, 0))
}

fn parse_filter(spec: &str) -> notionctl::Result<Value> {
    let raw = json::read_json_spec_to_string(spec)?;
    serde_json::from_str(&raw)
        .map_err(|e| Error::validation_invalid_json(e, Some("parse --filter".to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notionctl::ErrorCode;
    use std::io::Write;

    #[test]
    fn parse_filter_accepts_inline_json() {
        let filter = parse_filter(r#"{"property":"Status","select":{"equals":"Done"}}"#).unwrap();
        assert_eq!(filter["property"], "Status");
    }

    #[test]
    fn parse_filter_rejects_malformed_json() {
        let err = parse_filter("{not json").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidJson);
    }

    #[test]
    fn parse_filter_reads_at_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"property":"Done","checkbox":{{"equals":true}}}}"#).unwrap();
        let filter = parse_filter(&format!("@{}", file.path().display())).unwrap();
        assert_eq!(filter["property"], "Done");
    }
}
