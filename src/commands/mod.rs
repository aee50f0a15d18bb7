pub type CmdResult<T> = notionctl::Result<(T, i32)>;

pub mod add_entry;
pub mod get_database;
pub mod get_page;
pub mod query_database;
pub mod search;
pub mod test;
pub mod update_page;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        notionctl::output::map_cmd_result_to_json($module::run($args))
    };
}

pub(crate) fn run_json(command: crate::Commands) -> (notionctl::Result<serde_json::Value>, i32) {
    notionctl::tty::status("notionctl is working...");

    match command {
        crate::Commands::Test(args) => dispatch!(args, test),
        crate::Commands::QueryDatabase(args) => dispatch!(args, query_database),
        crate::Commands::AddEntry(args) => dispatch!(args, add_entry),
        crate::Commands::GetPage(args) => dispatch!(args, get_page),
        crate::Commands::UpdatePage(args) => dispatch!(args, update_page),
        crate::Commands::Search(args) => dispatch!(args, search),
        crate::Commands::GetDatabase(args) => dispatch!(args, get_database),
    }
}
