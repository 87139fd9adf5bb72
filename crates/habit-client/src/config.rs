//! Backend Configuration
//!
//! The only setting is the backend origin. It can be overridden at build time
//! through `HABIT_BACKEND_URL`.

/// Origin used when no override is supplied
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from an origin. Surrounding whitespace and trailing
    /// slashes are dropped; a blank value falls back to the default.
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self {
            base_url: trimmed.to_string(),
        }
    }

    /// Config baked in at compile time from `HABIT_BACKEND_URL`.
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("HABIT_BACKEND_URL"))
    }

    pub fn from_override(value: Option<&str>) -> Self {
        match value {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/habits`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_localhost() {
        assert_eq!(ApiConfig::from_override(None).base_url(), "http://localhost:8000");
        assert_eq!(ApiConfig::new("   ").base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn override_is_normalized() {
        let config = ApiConfig::from_override(Some(" https://habits.example.com/ "));
        assert_eq!(config.base_url(), "https://habits.example.com");
        assert_eq!(
            config.endpoint("/api/habits"),
            "https://habits.example.com/api/habits"
        );
        assert_eq!(
            config.endpoint("api/ask"),
            "https://habits.example.com/api/ask"
        );
    }
}
