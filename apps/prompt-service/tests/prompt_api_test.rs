//! # Prompt Service 結合テスト

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use casedesk_domain::clock::SystemClock;
use casedesk_prompt_service::{
    app_builder::build_app,
    handler::PromptState,
    usecase::PromptUseCaseImpl,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_app() -> Router {
    build_app(Arc::new(PromptState {
        usecase: Arc::new(PromptUseCaseImpl::new(Arc::new(SystemClock))),
    }))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    send_to(test_app(), request).await
}

async fn send_to(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn post_assemble(body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/assemble")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_空の設定ではデフォルト値が返る() {
    let (status, body) = send(post_assemble(&json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], "mistral:tiny");
    assert_eq!(body["fiboTags"], json!(["Loan", "Rate", "Borrower"]));
    assert!(!body["promptId"].as_str().unwrap().is_empty());
    assert!(body["assembledAt"].as_str().unwrap().contains("UTC"));
}

#[rstest]
#[case::文字列(json!({"model": "gpt-x"}), json!("gpt-x"))]
#[case::null(json!({"model": null}), json!(null))]
#[case::数値(json!({"model": 42}), json!(42))]
#[tokio::test]
async fn test_指定したmodelはそのまま返り他はデフォルトのまま(
    #[case] config: Value,
    #[case] expected_model: Value,
) {
    let (_, body) = send(post_assemble(&config)).await;

    assert_eq!(body["model"], expected_model);
    assert_eq!(body["fiboTags"], json!(["Loan", "Rate", "Borrower"]));
    assert_eq!(
        body["template"],
        "You are a document QA engine. Use provided context and answer strictly in JSON."
    );
}

#[tokio::test]
async fn test_指定したfibo_tagsがそのまま返る() {
    let (_, body) = send(post_assemble(&json!({"fiboTags": ["Collateral"]}))).await;

    assert_eq!(body["fiboTags"], json!(["Collateral"]));
    assert_eq!(body["model"], "mistral:tiny");
}

#[tokio::test]
async fn test_ヘルスチェックはupとバージョンを返す() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "UP", "version": "0.0.1"}));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_ヘルスチェックは並行呼び出しでも常に同じ応答を返す() {
    let app = test_app();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                let request = Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap();
                send_to(app, request).await
            })
        })
        .collect();

    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "UP", "version": "0.0.1"}));
    }
}
