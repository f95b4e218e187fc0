use anyhow::Result;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::constants::api;

/// Thin client for the ThinkTank REST API.
///
/// Holds the base URL and an optional credential. Each endpoint method
/// issues exactly one request, awaits the full response, and returns the
/// parsed JSON body as-is. No retries, no timeout, no response typing.
pub struct ThinkTankClient {
    config: ClientConfig,
    client: Client,
}

impl ThinkTankClient {
    pub fn new(config: ClientConfig) -> Self {
        // No timeout - mirror whatever the server takes
        let client = Client::new();

        Self { config, client }
    }

    /// Build a client resolving credential and base URL from the environment.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.config.api_key.as_deref()
    }

    /// Install a credential, typically one returned by key generation.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.config.api_key = Some(api_key.into());
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint)
    }

    fn headers(&self, request: RequestBuilder, authenticated: bool) -> RequestBuilder {
        let request = request.header("Content-Type", "application/json");

        match self.config.api_key.as_deref() {
            Some(key) if authenticated => request.header(api::API_KEY_HEADER, key),
            _ => request,
        }
    }

    async fn send(&self, request: RequestBuilder, endpoint: &str) -> Result<Value> {
        debug!("Sending request to {}", endpoint);

        let response = request
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("HTTP request to {} failed: {}", endpoint, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Request to {} failed with status {}: {}",
                endpoint,
                status,
                error_text
            ));
        }

        response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse response from {}: {}", endpoint, e))
    }

    pub(crate) async fn get(&self, endpoint: &str) -> Result<Value> {
        let request = self.headers(self.client.get(self.url(endpoint)), true);
        self.send(request, endpoint).await
    }

    /// GET without the credential header, for public endpoints.
    pub(crate) async fn get_public(&self, endpoint: &str) -> Result<Value> {
        let request = self.headers(self.client.get(self.url(endpoint)), false);
        self.send(request, endpoint).await
    }

    pub(crate) async fn post<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> Result<Value> {
        let request = self
            .headers(self.client.post(self.url(endpoint)), true)
            .json(payload);
        self.send(request, endpoint).await
    }

    /// POST without the credential header, for key generation.
    pub(crate) async fn post_public<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> Result<Value> {
        let request = self
            .headers(self.client.post(self.url(endpoint)), false)
            .json(payload);
        self.send(request, endpoint).await
    }

    pub(crate) async fn put<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> Result<Value> {
        let request = self
            .headers(self.client.put(self.url(endpoint)), true)
            .json(payload);
        self.send(request, endpoint).await
    }

    pub(crate) async fn delete(&self, endpoint: &str) -> Result<Value> {
        let request = self.headers(self.client.delete(self.url(endpoint)), true);
        self.send(request, endpoint).await
    }
}

impl Clone for ThinkTankClient {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            client: self.client.clone(),
        }
    }
}
