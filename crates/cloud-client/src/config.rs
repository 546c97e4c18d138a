//! Client configuration

/// Where the managed backend lives and how to authorize data calls
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the managed backend, without a trailing slash
    pub base_url: String,
    /// API key for the data API's apiKey authorization mode
    pub api_key: Option<String>,
}

impl ClientConfig {
    /// Build a config for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: None,
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Read the config from the environment.
    ///
    /// `CLOUDTASK_API_URL` defaults to a local backend;
    /// `CLOUDTASK_API_KEY` is optional.
    pub fn from_env() -> Self {
        let base_url = std::env::var("CLOUDTASK_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
        let mut config = Self::new(base_url);
        if let Ok(api_key) = std::env::var("CLOUDTASK_API_KEY") {
            config.api_key = Some(api_key);
        }
        config
    }

    /// Join a path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::new("https://api.example.com/");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.url("/tasks"), "https://api.example.com/tasks");
    }

    #[test]
    fn test_api_key_builder() {
        let config = ClientConfig::new("https://api.example.com").with_api_key("k1");
        assert_eq!(config.api_key.as_deref(), Some("k1"));
    }
}
