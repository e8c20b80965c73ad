//! # Case Service 結合テスト
//!
//! 実際のリポジトリ（インメモリ）とルーター全体を組み合わせて、
//! 案件レジストリの外部から観測できる振る舞いを検証する。

use std::{collections::HashSet, sync::Arc};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use casedesk_case_service::{app_builder::build_app, handler::CaseState, usecase::CaseUseCaseImpl};
use casedesk_domain::clock::SystemClock;
use casedesk_infra::repository::InMemoryCaseRepository;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_app() -> Router {
    let usecase = CaseUseCaseImpl::new(
        Arc::new(InMemoryCaseRepository::new()),
        Arc::new(SystemClock),
    );
    build_app(Arc::new(CaseState {
        usecase: Arc::new(usecase),
    }))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn post_case(body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/cases")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_登録したフィールドとシステム項目がレスポンスに含まれる() {
    let app = test_app();
    let input = json!({"borrower": "ACME", "amount": 1200, "tags": ["a", "b"]});

    let (status, record) = send(&app, post_case(&input)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!record["caseId"].as_str().unwrap().is_empty());
    assert_eq!(record["status"], "RECEIVED");
    assert!(record["createdAt"].as_str().unwrap().contains("UTC"));
    assert_eq!(record["borrower"], "ACME");
    assert_eq!(record["amount"], 1200);
    assert_eq!(record["tags"], json!(["a", "b"]));
}

#[tokio::test]
async fn test_システム項目は呼び出し元の同名フィールドを上書きする() {
    let app = test_app();
    let input = json!({"caseId": "mine", "status": "CLOSED"});

    let (_, record) = send(&app, post_case(&input)).await;

    assert_ne!(record["caseId"], "mine");
    assert_eq!(record["status"], "RECEIVED");
}

#[tokio::test]
async fn test_登録直後にidで取得すると同じレコードを返す() {
    let app = test_app();
    let (_, created) = send(&app, post_case(&json!({"borrower": "ACME"}))).await;
    let id = created["caseId"].as_str().unwrap();

    let (status, fetched) = send(&app, get(&format!("/api/cases/{id}"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_未登録のidは404のproblem_detailsを返す() {
    let app = test_app();

    let (status, body) = send(&app, get("/api/cases/does-not-exist")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert_eq!(body["title"], "Not Found");
}

#[tokio::test]
async fn test_n件登録すると一覧はn件の異なるidを返す() {
    let app = test_app();
    for i in 0..5 {
        send(&app, post_case(&json!({"seq": i}))).await;
    }

    let (status, body) = send(&app, get("/api/cases")).await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 5);
    let ids: HashSet<&str> = records
        .iter()
        .map(|r| r["caseId"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 5);
}

#[tokio::test]
async fn test_空のレジストリの一覧は空配列を返す() {
    let app = test_app();

    let (status, body) = send(&app, get("/api/cases")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_ヘルスチェックはupとバージョンを返す() {
    let app = test_app();

    let (status, body) = send(&app, get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "UP", "version": "0.0.1"}));
}

#[tokio::test]
async fn test_自動生成のx_request_idがuuid_v7形式で返される() {
    let app = test_app();

    let response = app.oneshot(get("/api/health")).await.unwrap();

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id ヘッダーが存在すること")
        .to_str()
        .unwrap();
    let uuid = uuid::Uuid::parse_str(request_id).unwrap();
    assert_eq!(uuid.get_version(), Some(uuid::Version::SortRand));
}

#[tokio::test]
async fn test_クライアント提供のx_request_idがそのまま返される() {
    let app = test_app();
    let request = Request::builder()
        .uri("/api/health")
        .header("x-request-id", "client-id-123")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "client-id-123"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_ヘルスチェックは並行呼び出しでも常に同じ応答を返す() {
    let app = test_app();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { send(&app, get("/api/health")).await })
        })
        .collect();

    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "UP", "version": "0.0.1"}));
    }
}
