//! # Gateway 設定
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `GATEWAY_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `GATEWAY_PORT` | No | `4000` | ポート番号 |
//! | `PROMPT_SERVICE_URL` | No | `http://localhost:8080` | Prompt Service のベース URL |
//! | `PROMPT_SERVICE_TIMEOUT_SECS` | No | `60` | Prompt Service 呼び出しのタイムアウト（秒） |
//! | `UPLOAD_DIR` | No | `/data/uploads` | アップロードファイルの保存先 |

use std::{env, path::PathBuf, time::Duration};

use casedesk_shared::config::{ConfigError, parse_or, string_or};

/// Gateway サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// Prompt Service のベース URL
    pub prompt_service_url: String,
    /// Prompt Service 呼び出しのタイムアウト
    pub prompt_service_timeout: Duration,
    /// アップロードファイルの保存先
    pub upload_dir: PathBuf,
}

impl GatewayConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: string_or(&lookup, "GATEWAY_HOST", "0.0.0.0"),
            port: parse_or(&lookup, "GATEWAY_PORT", 4000)?,
            prompt_service_url: string_or(&lookup, "PROMPT_SERVICE_URL", "http://localhost:8080"),
            prompt_service_timeout: Duration::from_secs(parse_or(
                &lookup,
                "PROMPT_SERVICE_TIMEOUT_SECS",
                60,
            )?),
            upload_dir: PathBuf::from(string_or(&lookup, "UPLOAD_DIR", "/data/uploads")),
        })
    }
}
