//! API utilities for talking to the warehouse API
//!
//! The base URL is taken from `API_BASE_URL` at build time when it is set
//! (e.g. `API_BASE_URL=https://erp.example.vn trunk build`). Otherwise it is
//! derived from the current window location using the default API port.

const API_BASE_OVERRIDE: Option<&str> = option_env!("API_BASE_URL");

/// Port of the warehouse API when served next to the frontend
const DEFAULT_API_PORT: u16 = 5000;

/// Get the base URL for API requests
///
/// # Returns
/// - The build-time override without trailing slash, if configured
/// - Otherwise a URL like "http://localhost:5000"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE.map(str::trim).filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/WarehouseExport/dashboard/export-summary");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
