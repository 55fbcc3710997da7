//! Integration tests for the HTTP pattern client, backed by a wiremock
//! server, plus an end-to-end drive of the submission flow against it.

use std::sync::Arc;

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lifedeck::Mode;
use lifedeck::api::{ApiError, HttpPatternClient, NewPattern, PatternStore};
use lifedeck::core::action::{Action, Effect, update};
use lifedeck::core::state::{App, GameParameters};
use lifedeck::core::submission::SubmissionPhase;

fn glider() -> NewPattern {
    NewPattern {
        owner: "alice".to_string(),
        name: "glider".to_string(),
        body: "010 001 111".to_string(),
    }
}

fn app_for(server_url: &str) -> App {
    let game = GameParameters {
        is_running: false,
        physics_active: false,
        username: Some("alice".to_string()),
        configuration: vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 1, 1]],
    };
    App::new(
        Arc::new(HttpPatternClient::new(server_url.to_string())),
        game,
        Mode::TwoD,
    )
}

#[tokio::test]
async fn create_pattern_posts_the_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/patterns"))
        .and(body_json(serde_json::json!({
            "owner": "alice",
            "name": "glider",
            "body": "010 001 111",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpPatternClient::new(server.uri());
    client.create_pattern(&glider()).await.unwrap();
}

#[tokio::test]
async fn rejection_surfaces_the_server_message_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/patterns"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(serde_json::json!({"msg": "duplicate name"})),
        )
        .mount(&server)
        .await;

    let client = HttpPatternClient::new(server.uri());
    let err = client.create_pattern(&glider()).await.unwrap_err();

    match err {
        ApiError::Rejected { status, msg } => {
            assert_eq!(status, 409);
            assert_eq!(msg, "duplicate name");
        }
        other => panic!("Expected Rejected, got {:?}", other),
    }
}

#[tokio::test]
async fn rejection_without_a_body_falls_back_to_the_status_line() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/patterns"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = HttpPatternClient::new(server.uri());
    let err = client.create_pattern(&glider()).await.unwrap_err();

    match err {
        ApiError::Rejected { status, msg } => {
            assert_eq!(status, 500);
            assert_eq!(msg, "Internal Server Error");
        }
        other => panic!("Expected Rejected, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Nothing listens here
    let client = HttpPatternClient::new("http://127.0.0.1:1".to_string());
    let err = client.create_pattern(&glider()).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn list_patterns_fetches_the_owner_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/patterns/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"owner": "alice", "name": "glider", "body": "010 001 111"},
            {"owner": "alice", "name": "blinker", "body": "000 111 000"},
        ])))
        .mount(&server)
        .await;

    let client = HttpPatternClient::new(server.uri());
    let patterns = client.list_patterns("alice").await.unwrap();

    assert_eq!(patterns.len(), 2);
    assert_eq!(patterns[0].name, "glider");
    assert_eq!(patterns[1].body, "000 111 000");
}

/// Drives the full flow the way the event loop does: submit through
/// `update()`, perform the emitted effect against the mock server, feed the
/// result back as an action.
#[tokio::test]
async fn successful_submission_reaches_the_success_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/patterns"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server.uri());
    update(&mut app, Action::OpenSaveDialog);
    let effect = update(
        &mut app,
        Action::SubmitPattern {
            name: "glider".to_string(),
        },
    );

    let pattern = match effect {
        Effect::SubmitPattern(p) => p,
        other => panic!("Expected SubmitPattern effect, got {:?}", other),
    };
    assert_eq!(pattern, glider());

    let result = app.store.create_pattern(&pattern).await;
    let action = match result {
        Ok(()) => Action::SubmissionAccepted,
        Err(e) => Action::SubmissionFailed(e.to_string()),
    };
    update(&mut app, action);

    assert_eq!(app.phase, SubmissionPhase::Succeeded);
    assert!(app.success_visible);
    assert!(!app.dialog_open());
}

#[tokio::test]
async fn rejected_submission_lands_back_in_idle_with_the_banner() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/patterns"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(serde_json::json!({"msg": "duplicate name"})),
        )
        .mount(&server)
        .await;

    let mut app = app_for(&server.uri());
    let effect = update(
        &mut app,
        Action::SubmitPattern {
            name: "glider".to_string(),
        },
    );
    let pattern = match effect {
        Effect::SubmitPattern(p) => p,
        other => panic!("Expected SubmitPattern effect, got {:?}", other),
    };

    let err = app.store.create_pattern(&pattern).await.unwrap_err();
    update(&mut app, Action::SubmissionFailed(err.to_string()));

    assert_eq!(app.phase, SubmissionPhase::Idle);
    assert_eq!(app.error.as_deref(), Some("duplicate name"));
}
