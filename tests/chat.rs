mod common;

use common::{seed_business, spawn_app};

const RETURN_POLICY: &str = "We offer a 30-day return policy on all items. \
     Please keep your receipt and the original packaging.";

const FALLBACK_REPLY: &str =
    "I'm having trouble reaching our knowledge base right now. \
     Please try again in a moment or contact support directly.";

#[tokio::test]
async fn chat_replies_with_return_policy() {
    let app = match spawn_app().await {
        Some(app) => app,
        None => return,
    };
    seed_business(
        &app.db_pool,
        "acme",
        "We accept returns within 30 days. Shipping is free.",
    )
    .await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/chat", &app.address))
        .json(&serde_json::json!({
            "message": "What is your return policy?",
            "business_id": "acme",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Invalid body");
    assert_eq!(body["success"], true);
    assert_eq!(body["source"], "pattern_match");
    assert_eq!(body["response"], RETURN_POLICY);
    assert!(!body["conversation_id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn chat_logs_user_message_before_reply() {
    let app = match spawn_app().await {
        Some(app) => app,
        None => return,
    };
    seed_business(&app.db_pool, "acme", "We accept returns.").await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/chat", &app.address))
        .json(&serde_json::json!({
            "message": "Hello",
            "business_id": "acme",
            "conversation_id": "conv-1",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    let body: serde_json::Value = response.json().await.expect("Invalid body");
    // caller-supplied conversation id is kept on the happy path
    assert_eq!(body["conversation_id"], "conv-1");

    let history = client
        .get(&format!("{}/chat/history/conv-1", &app.address))
        .send()
        .await
        .expect("Failed to execute request.")
        .json::<serde_json::Value>()
        .await
        .expect("Invalid body");

    let messages = history["list"].as_array().expect("Expected message list");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "user");
    assert_eq!(messages[0]["message"], "Hello");
    assert_eq!(messages[1]["role"], "assistant");
    assert_eq!(messages[1]["message"], "Hello! How can I help you today?");
}

#[tokio::test]
async fn chat_with_unknown_business_returns_404() {
    let app = match spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/chat", &app.address))
        .json(&serde_json::json!({
            "message": "Hello",
            "business_id": "nope",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn chat_with_empty_message_returns_400() {
    let app = match spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/chat", &app.address))
        .json(&serde_json::json!({
            "message": "",
            "business_id": "acme",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn chat_falls_back_when_log_write_fails() {
    let app = match spawn_app().await {
        Some(app) => app,
        None => return,
    };
    seed_business(&app.db_pool, "acme", "We accept returns.").await;

    // sabotage the conversation log so the append after the lookup fails
    sqlx::query("DROP TABLE conversation_messages")
        .execute(&app.db_pool)
        .await
        .expect("Failed to drop table");

    let client = reqwest::Client::new();
    let response = client
        .post(&format!("{}/chat", &app.address))
        .json(&serde_json::json!({
            "message": "Hello",
            "business_id": "acme",
            "conversation_id": "conv-1",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Invalid body");
    assert_eq!(body["success"], false);
    assert_eq!(body["response"], FALLBACK_REPLY);
    assert!(!body["error"].as_str().unwrap().is_empty());
    // the fallback path mints a fresh conversation id, it never echoes
    // the caller-supplied one
    assert_ne!(body["conversation_id"], "conv-1");
    assert!(!body["conversation_id"].as_str().unwrap().is_empty());
}
