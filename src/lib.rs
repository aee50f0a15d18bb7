/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("page", "Fetching {} and its child blocks", page_id);
/// log_status!("query", "Querying database {}", database_id);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod error;
pub mod ident;
pub mod json;
pub mod notion;
pub mod output;
pub mod props;
pub mod token;
pub mod tty;

pub(crate) mod http;

// Re-exports for convenient access
pub use error::{Error, ErrorCode, Result};
