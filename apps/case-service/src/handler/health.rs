//! # ヘルスチェックハンドラ
//!
//! Case Service の稼働状態を確認するためのエンドポイント。
//!
//! レスポンス型は [`casedesk_shared::HealthResponse`] を参照。

use axum::Json;
use casedesk_shared::HealthResponse;

/// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::up(env!("CARGO_PKG_VERSION")))
}
