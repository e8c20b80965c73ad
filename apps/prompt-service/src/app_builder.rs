//! # Prompt Service アプリケーション構築

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use casedesk_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{PromptState, assemble, health_check};

/// ヘルスチェックのパス（Canonical Log Line の対象外）
pub const HEALTH_PATH: &str = "/api/health";

/// ルーターを構築する
///
/// レイヤー構成は Case Service と同じ（下に書いたものが外側）。
pub fn build_app(prompt_state: Arc<PromptState>) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health_check))
        .route("/api/assemble", post(assemble))
        .with_state(prompt_state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer::new().skip_path(HEALTH_PATH))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
