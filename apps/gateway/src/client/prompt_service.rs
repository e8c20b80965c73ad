//! # Prompt Service クライアント
//!
//! ## エンドポイント
//!
//! - `POST /api/assemble` - プロンプト組み立て
//!
//! レスポンスボディは解釈せず、JSON 値としてそのまま呼び出し元に返す。

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::middleware::inject_request_id;

/// Prompt Service クライアントエラー
#[derive(Debug, Clone, Error)]
pub enum PromptServiceError {
    /// 接続できない
    #[error("Prompt Service に接続できません: {0}")]
    Unreachable(String),

    /// タイムアウト
    #[error("Prompt Service の応答がタイムアウトしました")]
    Timeout,

    /// ネットワークエラー
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// 2xx 以外の応答
    #[error("予期しないステータス {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl From<reqwest::Error> for PromptServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PromptServiceError::Timeout
        } else if err.is_connect() {
            PromptServiceError::Unreachable(err.to_string())
        } else {
            PromptServiceError::Network(err.to_string())
        }
    }
}

/// Prompt Service クライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait PromptServiceClient: Send + Sync {
    /// プロンプトを組み立てる
    ///
    /// Prompt Service の `POST /api/assemble` を呼び出す。
    async fn assemble(&self, config: &Value) -> Result<Value, PromptServiceError>;
}

/// Prompt Service クライアント実装
pub struct PromptServiceClientImpl {
    base_url: String,
    timeout:  Duration,
    client:   reqwest::Client,
}

impl PromptServiceClientImpl {
    /// 新しい PromptServiceClient を作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: Prompt Service のベース URL（例: `http://localhost:8080`）
    /// - `timeout`: 1 リクエストあたりのタイムアウト
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PromptServiceClient for PromptServiceClientImpl {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn assemble(&self, config: &Value) -> Result<Value, PromptServiceError> {
        let url = format!("{}/api/assemble", self.base_url);

        let response = inject_request_id(self.client.post(&url))
            .timeout(self.timeout)
            .json(config)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json::<Value>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(PromptServiceError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_末尾のスラッシュを取り除く() {
        let sut = PromptServiceClientImpl::new("http://prompt-service:8080/", Duration::from_secs(1));

        assert_eq!(sut.base_url, "http://prompt-service:8080");
    }

    #[test]
    fn test_unexpected_statusのメッセージにステータスと本文を含む() {
        let err = PromptServiceError::UnexpectedStatus {
            status: 502,
            body:   "bad gateway".to_string(),
        };

        assert_eq!(err.to_string(), "予期しないステータス 502: bad gateway");
    }
}
