//! # Gateway アプリケーション構築
//!
//! クライアント・State の初期化とルーター構築を担当する。

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn,
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

use crate::{
    handler::{PromptProxyState, UploadState, assemble_prompt, health_check, upload},
    middleware::store_request_id,
};

/// `POST /upload` で受け付けるボディの上限（100 MiB）
pub const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// ヘルスチェックのパス（Canonical Log Line の対象外）
pub const HEALTH_PATH: &str = "/health";

/// ルーターを構築する
pub fn build_app(upload_state: Arc<UploadState>, prompt_state: Arc<PromptProxyState>) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health_check))
        .merge(
            Router::new()
                .route("/upload", post(upload))
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
                .with_state(upload_state),
        )
        .merge(
            Router::new()
                .route("/prompt/assemble", post(assemble_prompt))
                .with_state(prompt_state),
        )
        // Request ID レイヤー（レイヤー順序が重要: 下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: カスタムスパンに request_id を含める
        // 3. CanonicalLogLineLayer: リクエスト完了時に1行サマリログを出力
        // 4. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        // 5. store_request_id: task-local に保存し、Prompt Service へのヘッダー伝播に使用
        .layer(from_fn(store_request_id))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer::new().skip_path(HEALTH_PATH))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
