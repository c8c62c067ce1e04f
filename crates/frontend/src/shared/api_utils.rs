//! API configuration for frontend-backend communication
//!
//! The base URL is resolved once at startup and handed to the
//! [`Fetcher`](crate::shared::fetcher::Fetcher); pages never read it from
//! ambient state.

/// Delay before a success/error banner disappears.
pub const BANNER_DISMISS_MS: u32 = 5_000;
/// Delay before switching to maintenance after a requirement is filed.
pub const REQUIREMENT_REDIRECT_MS: u32 = 2_000;
/// Delay before leaving the login page after a successful login.
pub const LOGIN_REDIRECT_MS: u32 = 1_500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Trailing slashes are dropped so `{base}{path}` never doubles `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// `HOTEL_API_BASE_URL` at build time, otherwise the page host on port 3000.
    pub fn from_env() -> Self {
        match option_env!("HOTEL_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(api_base()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path such as `/authority/employee_list`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_without_double_slash() {
        let config = ApiConfig::new("http://hotel.local:3000/");
        assert_eq!(config.base_url(), "http://hotel.local:3000");
        assert_eq!(
            config.url("/login"),
            "http://hotel.local:3000/login"
        );
        assert_eq!(
            config.url("reseption/event_todays"),
            "http://hotel.local:3000/reseption/event_todays"
        );
    }
}
