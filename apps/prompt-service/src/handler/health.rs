//! # ヘルスチェックハンドラ

use axum::Json;
use casedesk_shared::HealthResponse;

/// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::up(env!("CARGO_PKG_VERSION")))
}
