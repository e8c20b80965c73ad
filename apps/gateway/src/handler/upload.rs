//! # ドキュメントアップロードハンドラ
//!
//! `POST /upload` の multipart ボディから `file` パートを取り出し、
//! アップロード先ディレクトリにランダムなファイル名（拡張子なし）で保存する。
//!
//! 保存するだけで、ファイル形式の判定や内容の解析は行わない。
//! `file` パートが無い場合も成功として `{"ok": true}` を返す。
//! ファイル名を持たない `file` パートはテキストフィールドとみなし、保存しない。

use std::{path::PathBuf, sync::Arc};

use axum::{
    Json,
    extract::{Multipart, State, multipart::Field},
};
use casedesk_shared::{event_log::event, log_business_event};
use serde::{Deserialize, Serialize};
use tokio::{fs, io::AsyncWriteExt};
use uuid::Uuid;

use crate::error::GatewayError;

/// アップロードファイルを格納する multipart フィールド名
pub const FILE_FIELD: &str = "file";

/// アップロードハンドラの共有状態
pub struct UploadState {
    pub upload_dir: PathBuf,
}

/// アップロードレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub ok:   bool,
    /// クライアントが送ったファイル名
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 保存先パス
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// POST /upload
pub async fn upload(
    State(state): State<Arc<UploadState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, GatewayError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let path = state.upload_dir.join(Uuid::new_v4().to_string());
        let size = store_field(field, &state.upload_dir, &path).await?;

        log_business_event!(
            event.category = event::category::DOCUMENT,
            event.action = event::action::DOCUMENT_UPLOADED,
            event.entity_type = event::entity_type::DOCUMENT,
            event.entity_id = %path.display(),
            event.size_bytes = size,
            event.result = event::result::SUCCESS,
            "ドキュメントを保存しました"
        );

        return Ok(Json(UploadResponse {
            ok:   true,
            name: Some(name),
            path: Some(path.display().to_string()),
        }));
    }

    Ok(Json(UploadResponse {
        ok:   true,
        name: None,
        path: None,
    }))
}

/// multipart フィールドをチャンク単位でファイルに書き出し、書き込んだバイト数を返す
///
/// 途中で失敗した場合は書きかけのファイルを削除する。
async fn store_field(
    mut field: Field<'_>,
    dir: &std::path::Path,
    path: &std::path::Path,
) -> Result<u64, GatewayError> {
    fs::create_dir_all(dir)
        .await
        .map_err(GatewayError::FileWrite)?;
    let mut file = fs::File::create(path)
        .await
        .map_err(GatewayError::FileWrite)?;

    let mut written: u64 = 0;
    let result = async {
        while let Some(chunk) = field.chunk().await? {
            file.write_all(&chunk)
                .await
                .map_err(GatewayError::FileWrite)?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(GatewayError::FileWrite)
    }
    .await;

    if let Err(e) = result {
        if let Err(remove_err) = fs::remove_file(path).await {
            tracing::warn!(path = %path.display(), "書きかけのファイルを削除できませんでした: {}", remove_err);
        }
        return Err(e);
    }

    Ok(written)
}
