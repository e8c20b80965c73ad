//! # Case Service 設定
//!
//! 環境変数から Case Service サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `CASE_SERVICE_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `CASE_SERVICE_PORT` | No | `8081` | ポート番号 |

use std::env;

use casedesk_shared::config::{ConfigError, parse_or, string_or};

/// Case Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseServiceConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl CaseServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: string_or(&lookup, "CASE_SERVICE_HOST", "0.0.0.0"),
            port: parse_or(&lookup, "CASE_SERVICE_PORT", 8081)?,
        })
    }
}
