use crate::constants::api;

/// Runtime configuration for the API client.
///
/// The credential is resolved from the explicit argument first, then the
/// `THINKTANK_API_KEY` environment variable. The base URL falls back to
/// `THINKTANK_API_URL` and finally the production default. There are no
/// config files and no other environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        let api_key = api_key.or_else(|| std::env::var(api::API_KEY_ENV).ok());
        let base_url = base_url
            .or_else(|| std::env::var(api::BASE_URL_ENV).ok())
            .unwrap_or_else(|| api::DEFAULT_BASE_URL.to_string());

        Self { base_url, api_key }
    }

    /// Resolve everything from the environment.
    pub fn from_env() -> Self {
        Self::new(None, None)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
