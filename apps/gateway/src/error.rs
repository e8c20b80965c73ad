//! # Gateway エラー定義
//!
//! アップロードは RFC 9457 Problem Details で、プロンプト組み立てのプロキシ失敗は
//! `{"error": "<メッセージ>"}` で返す。

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use casedesk_shared::{
    ErrorResponse,
    event_log::error::{category, kind},
};
use serde::Serialize;
use thiserror::Error;

use crate::client::PromptServiceError;

/// Gateway で発生するエラー
#[derive(Debug, Error)]
pub enum GatewayError {
    /// multipart ボディの読み取り失敗
    #[error("multipart の読み取りに失敗しました: {0}")]
    Multipart(#[from] MultipartError),

    /// アップロードファイルの書き込み失敗
    #[error("ファイルの書き込みに失敗しました: {0}")]
    FileWrite(#[source] std::io::Error),

    /// Prompt Service 呼び出しの失敗
    #[error(transparent)]
    PromptService(#[from] PromptServiceError),
}

/// プロキシ失敗時のレスポンスボディ
#[derive(Debug, Serialize)]
struct ProxyErrorBody {
    error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::Multipart(e) => {
                let body = ErrorResponse::bad_request(e.body_text());
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            GatewayError::FileWrite(e) => {
                tracing::error!(
                    error.category = category::INFRASTRUCTURE,
                    error.kind = kind::FILE_WRITE,
                    "ファイルの書き込みに失敗しました: {}",
                    e
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::internal_error()),
                )
                    .into_response()
            }
            GatewayError::PromptService(e) => {
                tracing::error!(
                    error.category = category::EXTERNAL_SERVICE,
                    error.kind = kind::SERVICE_COMMUNICATION,
                    "Prompt Service の呼び出しに失敗しました: {}",
                    e
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ProxyErrorBody {
                        error: e.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
