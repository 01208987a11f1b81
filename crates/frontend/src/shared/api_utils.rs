//! API utilities for frontend-backend communication

/// Get the base URL for API requests
///
/// The backend serves both the built frontend and the API, so requests go
/// to the origin the page was loaded from, whatever port it listens on.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available (the path is then used as is)
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
