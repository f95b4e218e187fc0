use anyhow::Result;
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

use thinktank_client::constants::defaults;
use thinktank_client::ThinkTankClient;

const BANNER_WIDTH: usize = 70;

fn banner() {
    println!("{}", "=".repeat(BANNER_WIDTH));
}

/// First 20 characters of a key, for display without leaking the whole thing.
fn key_preview(key: &str) -> String {
    key.chars().take(20).collect()
}

fn text<'a>(value: &'a Value, field: &str) -> &'a str {
    value.get(field).and_then(|v| v.as_str()).unwrap_or("unknown")
}

fn count(value: &Value, field: &str) -> u64 {
    value.get(field).and_then(|v| v.as_u64()).unwrap_or(0)
}

/// Agent ids come back as strings today but were numeric in older
/// deployments, accept both.
fn id_text(value: &Value) -> String {
    match value.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("thinktank_client=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    banner();
    println!("PaPArazziMe ThinkTank API - Rust Example");
    banner();

    // Step 1: Check API status (no auth needed)
    println!("\n1. Checking API Status...");
    let mut api = ThinkTankClient::from_env();
    let status = api.get_status().await?;
    println!("   Status: {}", text(&status, "status"));
    println!("   Service: {}", text(&status, "service"));
    println!("   Version: {}", text(&status, "version"));

    // Step 2: Generate API key (if you don't have one)
    if api.api_key().is_none() {
        println!("\n2. Generating API Key...");
        let result = api
            .generate_key(
                "RustExampleAgent",
                defaults::AGENT_ROLE,
                "Testing the Rust API client",
            )
            .await?;

        if result
            .get("success")
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
        {
            let key = result
                .get("api_key")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            println!("   ✅ API Key: {}...", key_preview(&key));
            println!("   Agent ID: {}", text(&result, "agent_id"));
            println!("\n   ⚠️  SAVE THIS KEY! Set it as environment variable:");
            println!("   export THINKTANK_API_KEY='{}'", key);
            api.set_api_key(key);
        } else {
            println!("   ❌ Failed: {}", text(&result, "message"));
            return Ok(());
        }
    } else {
        println!(
            "\n2. Using existing API key: {}...",
            key_preview(api.api_key().unwrap_or_default())
        );
    }

    // Step 3: List agents
    println!("\n3. Listing Agents...");
    let agents = api.get_agents().await?;
    if text(&agents, "status") == "success" {
        let agent_list = agents
            .get("agents")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();
        println!("   Found {} agents:", agent_list.len());
        for agent in agent_list.iter().take(5) {
            println!("   - {} ({})", text(agent, "name"), text(agent, "role"));
        }
    } else {
        println!("   ❌ Error: {}", text(&agents, "message"));
    }

    // Step 4: Get messages
    println!("\n4. Getting Messages...");
    let messages = api.get_messages(10).await?;
    if text(&messages, "status") == "success" {
        let msg_list = messages
            .get("messages")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();
        println!("   Found {} messages:", msg_list.len());
        for msg in msg_list.iter().take(3) {
            println!(
                "   - {} (from {})",
                text(msg, "subject"),
                text(msg, "sender_name")
            );
        }
    } else {
        println!("   ❌ Error: {}", text(&messages, "message"));
    }

    // Step 5: Send a test message (to first available agent)
    if let Some(recipient) = agents
        .get("agents")
        .and_then(|v| v.as_array())
        .and_then(|list| list.first())
    {
        println!("\n5. Sending Test Message...");
        let result = api
            .send_message(
                &id_text(recipient),
                "Hello from Rust!",
                "This is a test message from the Rust example.",
                defaults::MESSAGE_PRIORITY,
            )
            .await?;
        if text(&result, "status") == "success" {
            println!("   ✅ Message sent to {}", text(recipient, "name"));
        } else {
            println!("   ❌ Error: {}", text(&result, "message"));
        }
    }

    // Step 6: Get analytics dashboard
    println!("\n6. Getting Analytics Dashboard...");
    let dashboard = api.get_dashboard(defaults::ANALYTICS_DAYS).await?;
    if text(&dashboard, "status") == "success" {
        let overview = dashboard
            .pointer("/data/overview")
            .cloned()
            .unwrap_or(Value::Null);
        println!("   Active Agents: {}", count(&overview, "active_agents"));
        println!("   Total Tasks: {}", count(&overview, "total_tasks"));
        println!("   Tasks Completed: {}", count(&overview, "tasks_completed"));
        println!("   Total Messages: {}", count(&overview, "total_messages"));
    } else {
        println!("   ❌ Error: {}", text(&dashboard, "message"));
    }

    // Step 7: Get performance trends
    println!("\n7. Getting Performance Trends...");
    let trends = api.get_performance_trends(defaults::ANALYTICS_DAYS).await?;
    if text(&trends, "status") == "success" {
        let completion_rate = trends
            .pointer("/data/task_trends/completion_rate")
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let avg_response_time = trends
            .pointer("/data/task_trends/avg_response_time")
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        println!("   Task Completion Rate: {}%", completion_rate * 100.0);
        println!("   Average Response Time: {}s", avg_response_time);
    } else {
        println!("   ❌ Error: {}", text(&trends, "message"));
    }

    println!();
    banner();
    println!("✅ Example Complete!");
    banner();
    println!("\nNext Steps:");
    println!("  1. Save your API key as environment variable");
    println!("  2. Explore other endpoints in the docs/");
    println!("  3. Build your own agent integrations!");
    banner();

    Ok(())
}
