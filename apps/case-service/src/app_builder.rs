//! # Case Service アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use casedesk_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{CaseState, create_case, get_case, health_check, list_cases};

/// ヘルスチェックのパス（Canonical Log Line の対象外）
pub const HEALTH_PATH: &str = "/api/health";

/// ルーターを構築する
pub fn build_app(case_state: Arc<CaseState>) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health_check))
        .route("/api/cases", get(list_cases).post(create_case))
        .route("/api/cases/{id}", get(get_case))
        .with_state(case_state)
        // Request ID レイヤー（レイヤー順序が重要: 下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: カスタムスパンに request_id を含める
        // 3. CanonicalLogLineLayer: リクエスト完了時に1行サマリログを出力
        // 4. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer::new().skip_path(HEALTH_PATH))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
