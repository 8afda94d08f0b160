use std::sync::Arc;

use bidhands_protocols::message::{BidRequest, Response};
use bidhands_protocols::routing::OrchestratorHandle;
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::credentials::{StaticCredentialStore, GEMINI_API_KEY};
use crate::generate::GenerationSettings;

fn spawn_against(server: &MockServer, store: StaticCredentialStore) -> OrchestratorHandle {
    Orchestrator::spawn(
        Arc::new(store),
        GenerationSettings {
            api_base_url: Some(server.uri()),
            ..GenerationSettings::default()
        },
    )
}

fn bid_request(description: &str) -> BidRequest {
    BidRequest {
        description: description.to_string(),
        extracted_bid_amount: Some(250.0),
        extracted_delivery_time: Some(7),
    }
}

async fn mock_success(server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": text}]}}]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_call_gemini_returns_bid_with_extracted_context() {
    let server = MockServer::start().await;
    mock_success(&server, "Hi! I can build this.\nBest regards,").await;
    let handle = spawn_against(&server, StaticCredentialStore::with(GEMINI_API_KEY, "k"));

    let response = handle.call_gemini(bid_request("Build me a logo")).await.unwrap();
    assert_eq!(
        response,
        Response::bid("Hi! I can build this.\nBest regards,", Some(250.0), Some(7))
    );
}

#[tokio::test]
async fn test_empty_description_is_rejected_synchronously() {
    let server = MockServer::start().await;
    let handle = spawn_against(&server, StaticCredentialStore::with(GEMINI_API_KEY, "k"));

    let response = handle.call_gemini(bid_request("   ")).await.unwrap();
    assert_eq!(
        response,
        Response::error_with_context(
            "Job description was missing in the request",
            Some(250.0),
            Some(7),
        )
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_credential_error_names_the_configuration_surface() {
    let server = MockServer::start().await;
    let handle = spawn_against(&server, StaticCredentialStore::empty());

    let response = handle.call_gemini(bid_request("desc")).await.unwrap();
    let message = response.error_message().unwrap();
    assert!(message.contains("API Key not set"));
    assert!(message.contains("configure"));
}

#[tokio::test]
async fn test_error_arm_echoes_extracted_values_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&server)
        .await;
    let handle = spawn_against(&server, StaticCredentialStore::with(GEMINI_API_KEY, "k"));

    let response = handle.call_gemini(bid_request("desc")).await.unwrap();
    match response {
        Response::Error {
            message,
            bid_amount,
            delivery_time,
        } => {
            assert!(message.contains("SAFETY"));
            assert_eq!(bid_amount, Some(250.0));
            assert_eq!(delivery_time, Some(7));
        }
        other => panic!("expected error response, got {other:?}"),
    }
}

#[tokio::test]
async fn test_overlapping_requests_each_get_their_own_answer() {
    let server = MockServer::start().await;
    mock_success(&server, "draft").await;
    let handle = spawn_against(&server, StaticCredentialStore::with(GEMINI_API_KEY, "k"));

    let a = handle.call_gemini(BidRequest {
        description: "first".to_string(),
        extracted_bid_amount: Some(1.0),
        extracted_delivery_time: None,
    });
    let b = handle.call_gemini(BidRequest {
        description: "second".to_string(),
        extracted_bid_amount: Some(2.0),
        extracted_delivery_time: None,
    });
    let (a, b) = tokio::join!(a, b);
    assert_eq!(a.unwrap(), Response::bid("draft", Some(1.0), None));
    assert_eq!(b.unwrap(), Response::bid("draft", Some(2.0), None));
}
