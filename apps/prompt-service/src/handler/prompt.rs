//! # プロンプト組み立てハンドラ
//!
//! `POST /api/assemble` - 設定（任意の JSON オブジェクト）からプロンプトを組み立てる

use std::sync::Arc;

use axum::{Json, extract::State};
use casedesk_domain::prompt::AssembledPrompt;
use serde_json::{Map, Value};

use crate::usecase::PromptUseCase;

/// プロンプトハンドラの共有状態
pub struct PromptState {
    pub usecase: Arc<dyn PromptUseCase>,
}

/// POST /api/assemble
pub async fn assemble(
    State(state): State<Arc<PromptState>>,
    Json(config): Json<Map<String, Value>>,
) -> Json<AssembledPrompt> {
    Json(state.usecase.assemble(config).await)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode},
        routing::post,
    };
    use casedesk_domain::prompt::PromptId;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    // テスト用スタブ: 固定 ID・固定時刻で組み立てる
    struct StubPromptUseCase;

    #[async_trait]
    impl PromptUseCase for StubPromptUseCase {
        async fn assemble(&self, config: Map<String, Value>) -> AssembledPrompt {
            AssembledPrompt::assemble(
                &config,
                PromptId::from_string("prompt-1"),
                Utc.with_ymd_and_hms(2026, 10, 19, 16, 32, 0).unwrap(),
            )
        }
    }

    fn create_test_app() -> Router {
        let state = Arc::new(PromptState {
            usecase: Arc::new(StubPromptUseCase),
        });

        Router::new()
            .route("/api/assemble", post(assemble))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_assemble_組み立て結果をcamel_caseのjsonで返す() {
        // Given
        let sut = create_test_app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/assemble")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"model":"gpt-x","extra":true}"#))
            .unwrap();

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "promptId": "prompt-1",
                "model": "gpt-x",
                "fiboTags": ["Loan", "Rate", "Borrower"],
                "template": "You are a document QA engine. Use provided context and answer strictly in JSON.",
                "assembledAt": "Mon Oct 19 16:32:00 UTC 2026"
            })
        );
    }

    #[tokio::test]
    async fn test_assemble_jsonでないボディは拒否される() {
        // Given
        let sut = create_test_app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/assemble")
            .header("content-type", "application/json")
            .body(Body::from("not json"))
            .unwrap();

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert!(response.status().is_client_error());
    }
}
