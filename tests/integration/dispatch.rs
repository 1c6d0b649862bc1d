//! Chat dispatcher behavior tests
//!
//! Drives the dispatcher directly against a wiremock upstream and an
//! in-memory history store.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::MockServer;

use jinshi::chat::types::Role;
use jinshi::{
    ChatOptions, HistoryStore, ModelCatalog, ModelConfig, StoredTurn, DEFAULT_MODEL_ID,
};

use crate::common::{constants::TEST_API_KEY, upstream_mocks, DispatchHarness};

fn stateful_options() -> ChatOptions {
    ChatOptions {
        chat_id: Some("c1".to_string()),
        sender_id: Some("u1".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn missing_api_key_fails_without_network_call() {
    let harness = DispatchHarness::new(None).await;

    let reply = harness
        .dispatcher
        .send("hello", &ChatOptions::default())
        .await;

    assert!(reply.starts_with("❌ Error:"), "got: {reply}");
    assert!(reply.contains("API key not configured"), "got: {reply}");
    // No HTTP call was attempted
    assert!(harness.upstream_bodies().await.is_empty());
}

#[tokio::test]
async fn reply_is_returned_and_both_sides_persisted() {
    let harness = DispatchHarness::new(Some(TEST_API_KEY)).await;
    upstream_mocks::mock_reply(&harness.upstream, "hey").await;

    let reply = harness.dispatcher.send("hi", &stateful_options()).await;
    assert_eq!(reply, "hey");

    let turns = harness.history.read("c1", "u1").await.unwrap();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].role, Role::User);
    assert_eq!(turns[0].content, "hi");
    assert_eq!(turns[1].role, Role::Assistant);
    assert_eq!(turns[1].content, "hey");
}

#[tokio::test]
async fn prior_turns_are_replayed_in_order() {
    let harness = DispatchHarness::new(Some(TEST_API_KEY)).await;
    upstream_mocks::mock_reply(&harness.upstream, "third answer").await;

    harness
        .history
        .write("c1", "u1", StoredTurn::new(Role::User, "first", None))
        .await
        .unwrap();
    harness
        .history
        .write("c1", "u1", StoredTurn::new(Role::Assistant, "second", None))
        .await
        .unwrap();

    harness.dispatcher.send("third", &stateful_options()).await;

    let bodies = harness.upstream_bodies().await;
    assert_eq!(bodies.len(), 1);
    let messages = bodies[0]["messages"].as_array().unwrap();

    // Two prior turns plus the new one
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0], json!({"role": "user", "content": "first"}));
    assert_eq!(messages[1], json!({"role": "assistant", "content": "second"}));
    assert_eq!(messages[2], json!({"role": "user", "content": "third"}));

    // Exactly two turns were appended after the call
    assert_eq!(harness.history.turn_count("c1", "u1"), 4);
}

#[tokio::test]
async fn stateless_call_never_touches_history() {
    let harness = DispatchHarness::new(Some(TEST_API_KEY)).await;
    upstream_mocks::mock_reply(&harness.upstream, "hey").await;

    // chat_id without sender_id is still stateless
    let options = ChatOptions {
        chat_id: Some("c1".to_string()),
        ..Default::default()
    };
    let reply = harness.dispatcher.send("hi", &options).await;

    assert_eq!(reply, "hey");
    assert_eq!(harness.history.turn_count("c1", "u1"), 0);
}

#[tokio::test]
async fn upstream_error_status_is_rendered_and_nothing_persisted() {
    let harness = DispatchHarness::new(Some(TEST_API_KEY)).await;
    upstream_mocks::mock_status(&harness.upstream, 500).await;

    let reply = harness.dispatcher.send("hi", &stateful_options()).await;

    assert_eq!(reply, "❌ Error: HTTP error! status: 500");
    assert_eq!(harness.history.turn_count("c1", "u1"), 0);
}

#[tokio::test]
async fn unknown_model_falls_back_to_default() {
    let harness = DispatchHarness::new(Some(TEST_API_KEY)).await;
    upstream_mocks::mock_reply(&harness.upstream, "hey").await;

    let options = ChatOptions {
        model: Some("no-such-model".to_string()),
        ..Default::default()
    };
    harness.dispatcher.send("hi", &options).await;

    let bodies = harness.upstream_bodies().await;
    assert_eq!(bodies[0]["model"], json!(DEFAULT_MODEL_ID));
}

#[tokio::test]
async fn payload_carries_fixed_sampling_parameters() {
    let harness = DispatchHarness::new(Some(TEST_API_KEY)).await;
    upstream_mocks::mock_reply(&harness.upstream, "hey").await;

    harness
        .dispatcher
        .send("hi", &ChatOptions::default())
        .await;

    let bodies = harness.upstream_bodies().await;
    assert_eq!(bodies[0]["max_tokens"], json!(1000));
    assert_eq!(bodies[0]["temperature"], json!(0.7));
}

#[tokio::test]
async fn plain_model_sends_string_content_even_with_image() {
    let harness = DispatchHarness::new(Some(TEST_API_KEY)).await;
    upstream_mocks::mock_reply(&harness.upstream, "hey").await;

    let options = ChatOptions {
        image_url: Some("http://example.com/cat.png".to_string()),
        ..Default::default()
    };
    harness.dispatcher.send("look at this", &options).await;

    let bodies = harness.upstream_bodies().await;
    let content = &bodies[0]["messages"][0]["content"];
    assert_eq!(content, &json!("look at this"));
}

async fn structured_harness() -> DispatchHarness {
    let upstream = MockServer::start().await;
    let catalog = Arc::new(ModelCatalog::new(vec![ModelConfig::new(
        "Claude 3 Haiku (OpenRouter)",
        "openrouter/anthropic/claude-3-haiku",
        upstream.uri(),
        Some(TEST_API_KEY.to_string()),
    )]));
    DispatchHarness::with_catalog(upstream, catalog)
}

#[tokio::test]
async fn structured_model_sends_text_then_image_parts() {
    let harness = structured_harness().await;
    upstream_mocks::mock_reply(&harness.upstream, "a cat").await;

    let options = ChatOptions {
        image_url: Some("http://example.com/cat.png".to_string()),
        ..Default::default()
    };
    harness.dispatcher.send("what is this", &options).await;

    let bodies = harness.upstream_bodies().await;
    let content = &bodies[0]["messages"][0]["content"];
    assert_eq!(
        content,
        &json!([
            {"type": "text", "text": "what is this"},
            {"type": "image_url", "image_url": {"url": "http://example.com/cat.png"}},
        ])
    );
}

#[tokio::test]
async fn structured_model_without_image_sends_only_text_part() {
    let harness = structured_harness().await;
    upstream_mocks::mock_reply(&harness.upstream, "hey").await;

    harness
        .dispatcher
        .send("hello", &ChatOptions::default())
        .await;

    let bodies = harness.upstream_bodies().await;
    let content = &bodies[0]["messages"][0]["content"];
    assert_eq!(content, &json!([{"type": "text", "text": "hello"}]));
}

#[tokio::test]
async fn missing_reply_content_degrades_to_placeholder() {
    let harness = DispatchHarness::new(Some(TEST_API_KEY)).await;
    upstream_mocks::mock_no_choices(&harness.upstream).await;

    let reply = harness.dispatcher.send("hi", &stateful_options()).await;

    assert_eq!(reply, "⚠️ No response from AI.");
    // Placeholder counts as a successful exchange and is persisted
    let turns = harness.history.read("c1", "u1").await.unwrap();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[1].content, "⚠️ No response from AI.");
}

#[tokio::test]
async fn empty_reply_content_degrades_to_placeholder() {
    let harness = DispatchHarness::new(Some(TEST_API_KEY)).await;
    upstream_mocks::mock_reply(&harness.upstream, "").await;

    let reply = harness.dispatcher.send("hi", &stateful_options()).await;

    // An empty reply string is as good as no reply
    assert_eq!(reply, "⚠️ No response from AI.");
    let turns = harness.history.read("c1", "u1").await.unwrap();
    assert_eq!(turns[1].content, "⚠️ No response from AI.");
}

#[tokio::test]
async fn non_json_body_is_rendered_as_error() {
    let harness = DispatchHarness::new(Some(TEST_API_KEY)).await;
    upstream_mocks::mock_non_json(&harness.upstream).await;

    let reply = harness.dispatcher.send("hi", &stateful_options()).await;

    assert!(reply.starts_with("❌ Error:"), "got: {reply}");
    assert_eq!(harness.history.turn_count("c1", "u1"), 0);
}

#[tokio::test]
async fn image_reference_is_persisted_with_the_user_turn() {
    let harness = structured_harness().await;
    upstream_mocks::mock_reply(&harness.upstream, "a cat").await;

    let options = ChatOptions {
        image_url: Some("http://example.com/cat.png".to_string()),
        chat_id: Some("c1".to_string()),
        sender_id: Some("u1".to_string()),
        ..Default::default()
    };
    harness.dispatcher.send("what is this", &options).await;

    let turns = harness.history.read("c1", "u1").await.unwrap();
    assert_eq!(
        turns[0].image_url.as_deref(),
        Some("http://example.com/cat.png")
    );
    assert_eq!(turns[1].image_url, None);
}

#[tokio::test]
async fn conversation_keys_are_isolated() {
    let harness = DispatchHarness::new(Some(TEST_API_KEY)).await;
    upstream_mocks::mock_reply(&harness.upstream, "hey").await;

    harness.dispatcher.send("hi", &stateful_options()).await;

    let other = ChatOptions {
        chat_id: Some("c1".to_string()),
        sender_id: Some("u2".to_string()),
        ..Default::default()
    };
    harness.dispatcher.send("yo", &other).await;

    let bodies = harness.upstream_bodies().await;
    // Second conversation saw none of the first conversation's turns
    assert_eq!(bodies[1]["messages"].as_array().unwrap().len(), 1);
    assert_eq!(harness.history.turn_count("c1", "u1"), 2);
    assert_eq!(harness.history.turn_count("c1", "u2"), 2);
}
