//! Result rendering and exit-code mapping.
//!
//! Success payloads go to stdout as pretty-printed JSON; errors are a single
//! `error[<code>]: <message>` line on stderr, followed by one `hint:` line
//! per remediation hint. The dispatcher alone turns errors into exit codes.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, ErrorCode, Result};

/// Serializes handler output and resolves the process exit code.
pub fn map_cmd_result_to_json<T: Serialize>(result: Result<(T, i32)>) -> (Result<Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(
                    err.to_string(),
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

pub fn print_result(result: Result<Value>) {
    match result {
        Ok(value) => print_success(&value),
        Err(err) => eprint!("{}", format_error(&err)),
    }
}

fn print_success(value: &Value) {
    use std::io::{self, Write};

    let payload = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    // Exit gracefully on SIGPIPE
    let _ = writeln!(handle, "{}", payload);
}

/// Renders an error as the stderr lines the dispatcher prints.
pub fn format_error(err: &Error) -> String {
    let mut out = format!("error[{}]: {}\n", err.code.as_str(), err.message);
    for hint in &err.hints {
        out.push_str(&format!("hint: {}\n", hint.message));
    }
    out
}

/// Every failure maps to exit code 1; the match stays exhaustive so a new
/// code is a deliberate decision about its exit status.
pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ConfigMissingToken
        | ErrorCode::ValidationMissingArgument
        | ErrorCode::ValidationInvalidArgument
        | ErrorCode::ValidationInvalidJson
        | ErrorCode::RemoteNotFound
        | ErrorCode::RemoteApiError
        | ErrorCode::RemoteRequestFailed
        | ErrorCode::InternalIoError
        | ErrorCode::InternalJsonError
        | ErrorCode::InternalUnexpected => 1,
    }
}
