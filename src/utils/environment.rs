use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variables holding the Gemini credential, in lookup order
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Read the upstream credential from the environment
pub fn get_api_key() -> Option<String> {
    resolve_api_key(|name| env::var(name).ok())
}

/// First non-blank value among [`API_KEY_VARS`]
fn resolve_api_key(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Get the directory for log files (~/.cache/uni-bijoy on Linux)
pub fn get_log_dir() -> Result<PathBuf> {
    let cache = dirs::cache_dir().context("Could not determine cache directory")?;
    Ok(cache.join("uni-bijoy"))
}
