//! # プロンプト組み立てプロキシハンドラ
//!
//! `POST /prompt/assemble` のボディを Prompt Service の `POST /api/assemble` に転送し、
//! 応答 JSON をそのまま返す。失敗時は 500 `{"error": "..."}`。

use std::sync::Arc;

use axum::{Json, extract::State};
use casedesk_shared::{event_log::event, log_business_event};
use serde_json::Value;

use crate::{client::PromptServiceClient, error::GatewayError};

/// プロキシハンドラの共有状態
pub struct PromptProxyState {
    pub client: Arc<dyn PromptServiceClient>,
}

/// POST /prompt/assemble
pub async fn assemble_prompt(
    State(state): State<Arc<PromptProxyState>>,
    Json(config): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let assembled = state.client.assemble(&config).await?;
    let prompt_id = assembled
        .get("promptId")
        .and_then(Value::as_str)
        .unwrap_or("-");

    log_business_event!(
        event.category = event::category::PROMPT,
        event.action = event::action::PROMPT_PROXIED,
        event.entity_type = event::entity_type::PROMPT,
        event.entity_id = prompt_id,
        event.result = event::result::SUCCESS,
        "プロンプト組み立てを中継しました"
    );

    Ok(Json(assembled))
}
