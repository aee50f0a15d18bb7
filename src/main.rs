use clap::{CommandFactory, Parser, Subcommand};

mod commands;

use commands::{
    add_entry, get_database, get_page, query_database, search, test, update_page,
};
use notionctl::output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "notionctl")]
#[command(version = VERSION)]
#[command(about = "CLI for Notion workspace pages, databases, and search")]
#[command(after_help = "Environment:\n  NOTION_TOKEN    Required. Internal integration token (secret_...)\n\nDatabase IDs are accepted with or without hyphens.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check connectivity and list accessible pages and databases
    Test(test::TestArgs),
    /// Query entries in a database, with simplified properties
    QueryDatabase(query_database::QueryDatabaseArgs),
    /// Add an entry to a database
    AddEntry(add_entry::AddEntryArgs),
    /// Fetch a page with its child blocks
    GetPage(get_page::GetPageArgs),
    /// Update properties on a page
    UpdatePage(update_page::UpdatePageArgs),
    /// Search the workspace
    Search(search::SearchArgs),
    /// Fetch a database's schema
    GetDatabase(get_database::GetDatabaseArgs),
}

fn main() -> std::process::ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too; only real parse failures
            // (unknown command, bad flag) exit non-zero
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return std::process::ExitCode::from(code);
        }
    };

    let Some(command) = cli.command else {
        let mut cmd = Cli::command();
        cmd.print_help().ok();
        println!();
        return std::process::ExitCode::SUCCESS;
    };

    let (json_result, exit_code) = commands::run_json(command);
    output::print_result(json_result);
    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
