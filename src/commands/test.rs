use clap::Args;
use serde::Serialize;
use serde_json::Value;

use notionctl::notion::{self, NotionClient};
use notionctl::{ident, token};

use super::CmdResult;

#[derive(Args)]
pub struct TestArgs {}

#[derive(Serialize)]
pub struct TestOutput {
    pub connected: bool,
    pub found: usize,
    pub results: Vec<TestEntry>,
}

#[derive(Serialize)]
pub struct TestEntry {
    pub object: String,
    pub title: String,
    pub id: String,
}

pub fn run(_args: TestArgs) -> CmdResult<TestOutput> {
    let client = NotionClient::new(token::load()?);
    notionctl::log_status!("test", "Listing up to 20 accessible resources");
    let results = client.search(None, 20)?;

    let entries: Vec<TestEntry> = results
        .iter()
        .map(|item| TestEntry {
            object: item
                .get("object")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string(),
            title: notion::entity_title(item),
            id: short_id(item.get("id").and_then(Value::as_str).unwrap_or_default()),
        })
        .collect();

    Ok((
        TestOutput {
            connected: true,
            found: entries.len(),
            results: entries,
        },
        0,
    ))
}

fn short_id(id: &str) -> String {
    let normalized = ident::normalize(id);
    let head: String = normalized.chars().take(8).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_id_truncates_normalized_form() {
        assert_eq!(short_id("59833787-2cf9-4fdf"), "59833787...");
    }

    #[test]
    fn short_id_tolerates_short_input() {
        assert_eq!(short_id("ab-c"), "abc...");
    }
}
