//! Error rendering and exit-code contract.

use notionctl::output::{exit_code_for_error, format_error, map_cmd_result_to_json};
use notionctl::{Error, ErrorCode};

#[test]
fn every_error_code_exits_one() {
    let codes = [
        ErrorCode::ConfigMissingToken,
        ErrorCode::ValidationMissingArgument,
        ErrorCode::ValidationInvalidArgument,
        ErrorCode::ValidationInvalidJson,
        ErrorCode::RemoteNotFound,
        ErrorCode::RemoteApiError,
        ErrorCode::RemoteRequestFailed,
        ErrorCode::InternalIoError,
        ErrorCode::InternalJsonError,
        ErrorCode::InternalUnexpected,
    ];
    for code in codes {
        assert_eq!(exit_code_for_error(code), 1, "{}", code.as_str());
    }
}

#[test]
fn success_maps_to_handler_exit_code() {
    let (value, exit_code) =
        map_cmd_result_to_json(Ok((serde_json::json!({ "ok": true }), 0)));
    assert_eq!(exit_code, 0);
    assert_eq!(value.unwrap()["ok"], serde_json::json!(true));
}

#[test]
fn failure_maps_through_exit_code_table() {
    let err = Error::validation_missing_argument(vec!["--properties".to_string()]);
    let (result, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
    assert_eq!(exit_code, 1);
    assert_eq!(
        result.unwrap_err().code,
        ErrorCode::ValidationMissingArgument
    );
}

#[test]
fn errors_render_as_single_line_with_code() {
    let err = Error::validation_missing_argument(vec!["--properties".to_string()]);
    let rendered = format_error(&err);
    assert_eq!(
        rendered,
        "error[validation.missing_argument]: Missing required argument\n"
    );
}

#[test]
fn not_found_appends_remediation_hint() {
    let err = Error::remote_not_found("Could not find page.");
    let rendered = format_error(&err);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "error[remote.not_found]: Could not find page.");
    assert!(lines[1].starts_with("hint: "));
    assert!(lines[1].contains("shared with your integration"));
}

#[test]
fn missing_token_renders_remediation() {
    let err = Error::config_missing_token("NOTION_TOKEN");
    let rendered = format_error(&err);
    assert!(rendered.starts_with("error[config.missing_token]: NOTION_TOKEN is not set"));
    assert!(rendered.contains("hint: "));
    assert!(rendered.contains("my-integrations"));
}

#[test]
fn transport_failures_are_marked_retryable() {
    let err = Error::remote_request_failed("connection refused");
    assert_eq!(err.code, ErrorCode::RemoteRequestFailed);
    assert_eq!(err.retryable, Some(true));
    assert!(err.message.contains("connection refused"));
}
