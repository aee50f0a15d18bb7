//! Integration token loading.
//!
//! The only configuration this tool needs: a Notion internal-integration
//! token read from the environment at startup.

use crate::error::{Error, Result};

pub const TOKEN_ENV: &str = "NOTION_TOKEN";

/// Loads the integration token, rejecting empty values.
pub fn load() -> Result<String> {
    match std::env::var(TOKEN_ENV) {
        Ok(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(Error::config_missing_token(TOKEN_ENV)),
    }
}
