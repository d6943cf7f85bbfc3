use std::env;

use leptos::logging::warn;
use url::Url;

use crate::error::AppError;

pub const DEFAULT_API_SERVER_URL: &str = "http://localhost:8080";
pub const DEFAULT_REVIEW_UPSTREAM_PATH: &str = "/review";

/// Server settings beyond the Leptos options.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base of the perfume backend, without a trailing slash.
    pub api_server_url: String,
    /// Backend path that stored reviews are posted to, `/{id}` is appended.
    pub review_upstream_path: String,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let api_server_url = var_or(&lookup, "API_SERVER_URL", DEFAULT_API_SERVER_URL);
        Url::parse(&api_server_url)
            .map_err(|e| AppError::Config(format!("API_SERVER_URL {api_server_url:?}: {e}")))?;

        let review_upstream_path =
            var_or(&lookup, "REVIEW_UPSTREAM_PATH", DEFAULT_REVIEW_UPSTREAM_PATH);

        Ok(Self {
            api_server_url: api_server_url.trim_end_matches('/').to_string(),
            review_upstream_path: format!("/{}", review_upstream_path.trim_matches('/')),
        })
    }

    pub fn review_url(&self, perfume_id: &str) -> String {
        format!("{}{}/{}", self.api_server_url, self.review_upstream_path, perfume_id)
    }

    pub fn presign_url(&self, name: &str) -> String {
        format!("{}/auth/review/image/{}", self.api_server_url, urlencoding::encode(name))
    }
}

fn var_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(value) => value.trim().to_string(),
        None => {
            warn!("[CONFIG] {key} not set, using default: {default}");
            default.to_string()
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "api={} reviews={}", self.api_server_url, self.review_upstream_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_server_url, DEFAULT_API_SERVER_URL);
        assert_eq!(config.review_url("3"), "http://localhost:8080/review/3");
    }

    #[test]
    fn test_overrides_are_normalized() {
        let config = Config::from_lookup(lookup(&[
            ("API_SERVER_URL", "https://api.acode.kr/"),
            ("REVIEW_UPSTREAM_PATH", "reviews/"),
        ]))
        .unwrap();
        assert_eq!(config.review_url("42"), "https://api.acode.kr/reviews/42");
        assert_eq!(
            config.presign_url("my photo.jpg"),
            "https://api.acode.kr/auth/review/image/my%20photo.jpg"
        );
    }

    #[test]
    fn test_malformed_url_is_rejected() {
        let result = Config::from_lookup(lookup(&[("API_SERVER_URL", "not a url")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
