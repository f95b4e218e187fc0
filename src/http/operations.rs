use anyhow::Result;
use serde::Serialize;
use serde_json::{json, Value};

use super::client::ThinkTankClient;

/// Body for `POST /api-keys/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct KeyRequest {
    pub agent_name: String,
    pub role: String,
    pub description: String,
}

/// Body for `POST /messages`.
#[derive(Debug, Clone, Serialize)]
pub struct NewMessage {
    pub recipient_id: String,
    pub subject: String,
    pub content: String,
    pub priority: String,
}

/// Body for `POST /collaboration/v2/task/{id}/update`.
#[derive(Debug, Clone, Serialize)]
pub struct TaskProgress {
    pub status: String,
    pub progress: u32,
    pub notes: String,
}

/// Body for `POST /collaboration/v2/task/{id}/complete`.
#[derive(Debug, Clone, Serialize)]
pub struct TaskCompletion {
    pub result: Value,
    pub confidence: f64,
    pub notes: String,
}

/// Body for `POST /llm/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct LlmChatRequest {
    pub provider: String,
    pub model: String,
    pub messages: Vec<Value>,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl ThinkTankClient {
    // === System Status ===

    /// API health status. Works without a credential.
    pub async fn get_status(&self) -> Result<Value> {
        self.get_public("/status").await
    }

    // === Agent Management ===

    /// Generate a new API key. The credential header is never sent here,
    /// this is how a fresh agent obtains one in the first place.
    pub async fn generate_key(
        &self,
        agent_name: &str,
        role: &str,
        description: &str,
    ) -> Result<Value> {
        let payload = KeyRequest {
            agent_name: agent_name.to_string(),
            role: role.to_string(),
            description: description.to_string(),
        };
        self.post_public("/api-keys/generate", &payload).await
    }

    /// List all agents.
    pub async fn get_agents(&self) -> Result<Value> {
        self.get("/agents").await
    }

    /// Get specific agent details.
    pub async fn get_agent(&self, agent_id: &str) -> Result<Value> {
        self.get(&format!("/agents/{}", agent_id)).await
    }

    /// Update agent profile fields.
    pub async fn update_agent(&self, agent_id: &str, fields: &Value) -> Result<Value> {
        self.put(&format!("/agents/{}", agent_id), fields).await
    }

    pub async fn delete_agent(&self, agent_id: &str) -> Result<Value> {
        self.delete(&format!("/agents/{}", agent_id)).await
    }

    // === Messaging ===

    /// Send a message to another agent.
    pub async fn send_message(
        &self,
        recipient_id: &str,
        subject: &str,
        content: &str,
        priority: &str,
    ) -> Result<Value> {
        let payload = NewMessage {
            recipient_id: recipient_id.to_string(),
            subject: subject.to_string(),
            content: content.to_string(),
            priority: priority.to_string(),
        };
        self.post("/messages", &payload).await
    }

    pub async fn get_messages(&self, limit: u32) -> Result<Value> {
        self.get(&format!("/messages?limit={}", limit)).await
    }

    pub async fn get_message(&self, message_id: &str) -> Result<Value> {
        self.get(&format!("/messages/{}", message_id)).await
    }

    // === Analytics ===

    /// Dashboard summary over the last `days` days (1-90).
    pub async fn get_dashboard(&self, days: u32) -> Result<Value> {
        self.get(&format!("/analytics/dashboard/summary?days={}", days))
            .await
    }

    pub async fn get_performance_trends(&self, days: u32) -> Result<Value> {
        self.get(&format!("/analytics/performance/trends?days={}", days))
            .await
    }

    pub async fn get_task_velocity(&self, days: u32) -> Result<Value> {
        self.get(&format!("/analytics/velocity/tasks?days={}", days))
            .await
    }

    pub async fn get_collaboration_network(&self, days: u32) -> Result<Value> {
        self.get(&format!("/analytics/collaboration/network?days={}", days))
            .await
    }

    pub async fn get_resource_utilization(&self, days: u32) -> Result<Value> {
        self.get(&format!("/analytics/resources/utilization?days={}", days))
            .await
    }

    // === Collaboration ===

    pub async fn get_agent_status(&self) -> Result<Value> {
        self.get("/collaboration/v2/agent/status").await
    }

    /// Report this agent as alive with the given status
    /// (`active`, `idle`, `busy`).
    pub async fn send_heartbeat(&self, status: &str) -> Result<Value> {
        let payload = json!({ "status": status });
        self.post("/collaboration/v2/agent/heartbeat", &payload)
            .await
    }

    pub async fn get_available_tasks(&self, limit: u32) -> Result<Value> {
        self.get(&format!(
            "/collaboration/v2/task/available/tasks?limit={}",
            limit
        ))
        .await
    }

    pub async fn claim_task(&self, task_id: &str) -> Result<Value> {
        self.post(
            &format!("/collaboration/v2/task/{}/claim", task_id),
            &json!({}),
        )
        .await
    }

    pub async fn update_task_progress(
        &self,
        task_id: &str,
        progress: u32,
        status: &str,
        notes: &str,
    ) -> Result<Value> {
        let payload = TaskProgress {
            status: status.to_string(),
            progress,
            notes: notes.to_string(),
        };
        self.post(&format!("/collaboration/v2/task/{}/update", task_id), &payload)
            .await
    }

    pub async fn complete_task(
        &self,
        task_id: &str,
        result: Value,
        confidence: f64,
        notes: &str,
    ) -> Result<Value> {
        let payload = TaskCompletion {
            result,
            confidence,
            notes: notes.to_string(),
        };
        self.post(
            &format!("/collaboration/v2/task/{}/complete", task_id),
            &payload,
        )
        .await
    }

    // === LLM Proxy ===

    /// Chat through the server-side LLM proxy.
    pub async fn llm_chat(&self, request: &LlmChatRequest) -> Result<Value> {
        self.post("/llm/chat", request).await
    }

    pub async fn llm_models(&self) -> Result<Value> {
        self.get("/llm/models").await
    }

    pub async fn llm_usage(&self) -> Result<Value> {
        self.get("/llm/usage").await
    }
}
