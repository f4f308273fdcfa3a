//! Deployment configuration
//!
//! Read from the environment on native builds and baked in at compile time
//! for the browser build, where there is no process environment.

use serde::{Deserialize, Serialize};

pub const ENV_BASE_URL: &str = "AI_CHAT_BASE_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// URL prefix the app is served under, e.g. `/app`
    pub base: String,
}

impl RouterConfig {
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = normalize_base(&base.into());
        self
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            match key {
                ENV_BASE_URL => option_env!("AI_CHAT_BASE_URL"),
                _ => None,
            }
            .map(str::to_string)
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base: lookup(ENV_BASE_URL)
                .map(|b| normalize_base(&b))
                .unwrap_or_default(),
        }
    }

    /// Remove the base prefix from a browser path
    pub fn strip_base<'a>(&self, path: &'a str) -> &'a str {
        if self.base.is_empty() {
            return path;
        }
        match path.strip_prefix(self.base.as_str()) {
            Some("") => "/",
            Some(rest) if rest.starts_with('/') || rest.starts_with('?') || rest.starts_with('#') => rest,
            _ => path,
        }
    }

    /// Prefix an app path with the base
    pub fn with_base_prefix(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// `/app/` and `app` both become `/app`; `/` becomes empty
fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_is_empty() {
        assert_eq!(RouterConfig::default().base, "");
    }

    #[test]
    fn test_from_lookup_normalizes_base() {
        let config = RouterConfig::from_lookup(|key| match key {
            ENV_BASE_URL => Some("app/".to_string()),
            _ => None,
        });
        assert_eq!(config.base, "/app");
        assert_eq!(RouterConfig::from_lookup(|_| None), RouterConfig::default());
    }

    #[test]
    fn test_root_base_is_empty() {
        assert_eq!(RouterConfig::default().with_base("/").base, "");
    }

    #[test]
    fn test_strip_base() {
        let config = RouterConfig::default().with_base("/app");
        assert_eq!(config.strip_base("/app"), "/");
        assert_eq!(config.strip_base("/app/chat"), "/chat");
        assert_eq!(config.strip_base("/app?message=hi"), "?message=hi");
        // Only whole segments are stripped
        assert_eq!(config.strip_base("/application"), "/application");
    }

    #[test]
    fn test_with_base_prefix() {
        let config = RouterConfig::default().with_base("/ai");
        assert_eq!(config.with_base_prefix("/"), "/ai/");
        assert_eq!(config.with_base_prefix("/chat"), "/ai/chat");
    }

    #[test]
    fn test_deserialize_partial() {
        let config: RouterConfig = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(config.base, "");
    }
}
