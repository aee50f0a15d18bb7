use clap::Args;
use serde::Serialize;
use serde_json::Value;

use notionctl::notion::NotionClient;
use notionctl::{ident, token, Error};

use super::CmdResult;

#[derive(Args)]
pub struct GetPageArgs {
    /// Page ID (hyphenated or not)
    pub id: String,
}

#[derive(Serialize)]
pub struct GetPageOutput {
    pub page: Value,
    pub blocks: Vec<Value>,
}

pub fn run(args: GetPageArgs) -> CmdResult<GetPageOutput> {
    let client = NotionClient::new(token::load()?);
    let id = ident::normalize(&args.id);
    notionctl::log_status!("page", "Fetching page {} and its child blocks", id);

    // The page body and its child blocks are independent; fetch both at
    // once and fail the whole command if either fails.
    let (page, blocks) = std::thread::scope(|scope| {
        let blocks = scope.spawn(|| client.list_block_children(&id, 100));
        let page = client.retrieve_page(&id);
        let blocks = blocks
            .join()
            .unwrap_or_else(|_| Err(Error::internal_unexpected("Block fetch thread panicked")));
        (page, blocks)
    });

    Ok((
        GetPageOutput {
            page: page?,
            blocks: blocks?,
        },
        0,
    ))
}
