//! # Case Service エラー定義
//!
//! Case Service 固有のエラーと、HTTP レスポンスへの変換を定義する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use casedesk_shared::{
    ErrorResponse,
    event_log::error::{category, kind},
};
use thiserror::Error;

/// Case Service で発生するエラー
#[derive(Debug, Error)]
pub enum CaseError {
    /// 案件が見つからない
    #[error("案件が見つかりません: {0}")]
    NotFound(String),

    /// ストアエラー
    #[error("ストアエラー: {0}")]
    Store(#[from] casedesk_infra::InfraError),
}

impl IntoResponse for CaseError {
    fn into_response(self) -> Response {
        let body = match &self {
            CaseError::NotFound(id) => {
                ErrorResponse::not_found(format!("ID '{id}' の案件は存在しません"))
            }
            CaseError::Store(e) => {
                tracing::error!(
                    error.category = category::INFRASTRUCTURE,
                    error.kind = kind::STORE,
                    "ストアエラー: {:?}",
                    e
                );
                ErrorResponse::internal_error()
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use casedesk_infra::InfraError;

    use super::*;

    #[test]
    fn test_not_foundは404に変換される() {
        let response = CaseError::NotFound("abc".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_ストアエラーは500に変換される() {
        let response = CaseError::Store(InfraError::lock_poisoned("cases")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
