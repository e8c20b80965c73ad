//! # ヘルスチェックハンドラ
//!
//! Gateway は他サービスと異なり、バージョンではなくサービス名を返す。

use axum::Json;
use casedesk_shared::health::STATUS_UP;
use serde::{Deserialize, Serialize};

/// Gateway のサービス名
pub const SERVICE_NAME: &str = "gateway";

/// Gateway のヘルスチェックレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayHealthResponse {
    pub status:  String,
    pub service: String,
}

/// GET /health
pub async fn health_check() -> Json<GatewayHealthResponse> {
    Json(GatewayHealthResponse {
        status:  STATUS_UP.to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
