//! # 案件ハンドラ
//!
//! 案件レジストリのエンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `POST /api/cases` - 案件登録（任意の JSON オブジェクト）
//! - `GET /api/cases/{id}` - 案件取得（未登録なら 404）
//! - `GET /api/cases` - 案件一覧

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::{Map, Value};

use crate::{error::CaseError, usecase::CaseUseCase};

/// 案件ハンドラの共有状態
pub struct CaseState {
    pub usecase: Arc<dyn CaseUseCase>,
}

/// POST /api/cases
///
/// リクエストボディのフィールドをそのまま保持し、`caseId` / `status` / `createdAt` を
/// 付与したレコードを返す。
pub async fn create_case(
    State(state): State<Arc<CaseState>>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, CaseError> {
    let record = state.usecase.create_case(fields).await?;
    Ok(Json(record))
}

/// GET /api/cases/{id}
pub async fn get_case(
    State(state): State<Arc<CaseState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CaseError> {
    let record = state
        .usecase
        .get_case(&id)
        .await?
        .ok_or(CaseError::NotFound(id))?;
    Ok(Json(record))
}

/// GET /api/cases
pub async fn list_cases(
    State(state): State<Arc<CaseState>>,
) -> Result<impl IntoResponse, CaseError> {
    let records = state.usecase.list_cases().await?;
    Ok(Json(records))
}
