//! # ヘルスチェック共通型
//!
//! Case Service / Prompt Service のヘルスチェックエンドポイントで
//! 使用される共通レスポンス型を提供する。

use serde::{Deserialize, Serialize};

/// 稼働中を表すステータス値
pub const STATUS_UP: &str = "UP";

/// ヘルスチェックレスポンス
///
/// 各サービスのヘルスチェックエンドポイントが返すレスポンス型。
/// `status` はサービスの稼働状態、`version` は Cargo.toml のバージョンを示す。
///
/// ## 使用例
///
/// ```
/// use casedesk_shared::HealthResponse;
///
/// let response = HealthResponse::up("0.0.1");
/// assert_eq!(response.status, "UP");
/// assert_eq!(response.version, "0.0.1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 稼働状態（常に `"UP"`）
    pub status:  String,
    /// アプリケーションバージョン
    pub version: String,
}

impl HealthResponse {
    /// 稼働中のレスポンスを作成する
    pub fn up(version: impl Into<String>) -> Self {
        Self {
            status:  STATUS_UP.to_string(),
            version: version.into(),
        }
    }
}
