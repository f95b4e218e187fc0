//! Mock ThinkTank API server for testing
//!
//! This provides a fake API that responds to the client endpoints without
//! requiring the real service. Unmatched requests return 404, which the
//! client surfaces as an error.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use thinktank_client::{ClientConfig, ThinkTankClient};

/// Build a client pointed at the mock server.
pub fn client_for(mock: &MockApiServer, api_key: Option<&str>) -> ThinkTankClient {
    ThinkTankClient::new(ClientConfig {
        base_url: mock.base_url.clone(),
        api_key: api_key.map(str::to_string),
    })
}

/// Mock API server that simulates ThinkTank HTTP responses
pub struct MockApiServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockApiServer {
    /// Create a new mock API server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// Mock the public health endpoint
    pub async fn mock_status(&self) {
        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "operational",
                "service": "ThinkTank API",
                "version": "2.1.0"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock successful key generation
    pub async fn mock_generate_key_success(&self, api_key: &str, agent_id: &str) {
        Mock::given(method("POST"))
            .and(path("/api-keys/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "api_key": api_key,
                "agent_id": agent_id
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock key generation rejected at the application level
    pub async fn mock_generate_key_failure(&self, message: &str) {
        Mock::given(method("POST"))
            .and(path("/api-keys/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "message": message
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock the agent listing endpoint with the given records
    pub async fn mock_agents(&self, agents: Value) {
        Mock::given(method("GET"))
            .and(path("/agents"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "agents": agents
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock the message listing endpoint with the given records
    pub async fn mock_messages(&self, messages: Value) {
        Mock::given(method("GET"))
            .and(path("/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "messages": messages
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock successful message delivery
    pub async fn mock_send_message_success(&self) {
        Mock::given(method("POST"))
            .and(path("/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "message_id": "msg-1"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock an arbitrary endpoint with a canned JSON response
    pub async fn mock_json(&self, http_method: &str, endpoint: &str, response: Value) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .mount(&self.server)
            .await;
    }

    /// Mock an API error response
    pub async fn mock_error(&self, http_method: &str, endpoint: &str, status_code: u16, error_msg: &str) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "error": error_msg
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock an endpoint returning a body that is not JSON at all
    pub async fn mock_malformed(&self, http_method: &str, endpoint: &str) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_string("<<not json>>"))
            .mount(&self.server)
            .await;
    }
}
