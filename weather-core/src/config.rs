use std::env;

/// Default current-weather endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Environment variable holding the provider credential.
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Settings for the provider client, injected at construction time.
///
/// A missing credential is a valid state: the client answers lookups
/// locally with an unauthorized payload instead of failing startup.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API credential; `None` short-circuits every lookup.
    pub api_key: Option<String>,

    /// Endpoint to query. Overridable so tests can point the client at
    /// a local mock server.
    pub base_url: String,
}

impl ProviderConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read the credential from the process environment. An empty value
    /// counts as unset.
    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_VAR).ok().filter(|key| !key.is_empty());
        Self::new(api_key)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_endpoint() {
        let cfg = ProviderConfig::new(Some("KEY".to_string()));

        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.api_key.as_deref(), Some("KEY"));
    }

    #[test]
    fn base_url_is_overridable() {
        let cfg = ProviderConfig::new(None).with_base_url("http://127.0.0.1:9999");

        assert_eq!(cfg.base_url, "http://127.0.0.1:9999");
        assert!(cfg.api_key.is_none());
    }
}
