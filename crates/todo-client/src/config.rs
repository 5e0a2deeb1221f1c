//! Client Configuration
//!
//! Remote origin and session lifetimes.

/// Default remote origin of the todolist API
pub const DEFAULT_BASE_URL: &str = "https://todolist-api.hexschool.io";

/// Lifetime of the `apiChecked` slot after a successful checkout
pub const CHECKED_EXPIRY_DAYS: f64 = 3.0;

/// Configuration for [`crate::ApiClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin every request path is appended to (no trailing slash)
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ClientConfig {
    /// Uses `TODO_API_BASE_URL` when it was set at build time.
    fn default() -> Self {
        Self::new(option_env!("TODO_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("http://localhost:3000/");
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_default_points_at_remote_origin() {
        if option_env!("TODO_API_BASE_URL").is_none() {
            assert_eq!(ClientConfig::default().base_url, DEFAULT_BASE_URL);
        }
    }
}
