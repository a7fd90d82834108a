//! Configuration constants and utilities for rosterly.

/// Default base URL of the students API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/";

/// Environment variable name for overriding the API base URL.
pub const API_URL_ENV_VAR: &str = "ROSTERLY_API_URL";

/// Get the API base URL, checking the environment variable first, then
/// falling back to the default.
pub fn get_api_base_url() -> String {
    std::env::var_os(API_URL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}
