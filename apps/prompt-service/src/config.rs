//! # Prompt Service 設定
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `PROMPT_SERVICE_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `PROMPT_SERVICE_PORT` | No | `8080` | ポート番号 |

use std::env;

use casedesk_shared::config::{ConfigError, parse_or, string_or};

/// Prompt Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptServiceConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl PromptServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: string_or(&lookup, "PROMPT_SERVICE_HOST", "0.0.0.0"),
            port: parse_or(&lookup, "PROMPT_SERVICE_PORT", 8080)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_環境変数の値が優先される() {
        let config = PromptServiceConfig::from_lookup(|name| match name {
            "PROMPT_SERVICE_HOST" => Some("127.0.0.1".to_string()),
            "PROMPT_SERVICE_PORT" => Some("9090".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(
            config,
            PromptServiceConfig {
                host: "127.0.0.1".to_string(),
                port: 9090,
            }
        );
    }

    #[test]
    fn test_未設定ならポート8080を使う() {
        let config = PromptServiceConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_数値でないポートはエラーになる() {
        let result = PromptServiceConfig::from_lookup(|name| {
            (name == "PROMPT_SERVICE_PORT").then(|| "http".to_string())
        });

        assert_eq!(
            result,
            Err(ConfigError::InvalidValue {
                name:  "PROMPT_SERVICE_PORT".to_string(),
                value: "http".to_string(),
            })
        );
    }
}
