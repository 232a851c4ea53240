//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port the partner API listens on when no explicit base URL is configured
pub const DEFAULT_API_PORT: u16 = 3333;

/// Get the base URL for API requests
///
/// A base URL baked in at build time through `PANEL_API_URL` wins.
/// Otherwise it is constructed from the current window location,
/// using [`DEFAULT_API_PORT`] for the API server.
///
/// # Returns
/// - API base URL like "http://localhost:3333" or "https://api.example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(configured) = configured_api_base() {
        return configured;
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

fn configured_api_base() -> Option<String> {
    normalize_base(option_env!("PANEL_API_URL")?)
}

fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/orders?pageIndex=0");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
