//! # 設定読み込みヘルパー
//!
//! 各サービスの設定は [12-Factor App](https://12factor.net/ja/config) の原則に従い
//! 環境変数から読み込む。ここでは全サービス共通の読み取り・パース処理を提供する。
//!
//! 環境変数の参照は `lookup` クロージャとして注入する。本番では `std::env::var`、
//! テストでは `HashMap` を渡すことで、プロセス環境を書き換えずに検証できる。
//!
//! ```
//! use casedesk_shared::config::{parse_or, string_or};
//!
//! let lookup = |name: &str| (name == "APP_PORT").then(|| "8081".to_string());
//!
//! let host = string_or(&lookup, "APP_HOST", "0.0.0.0");
//! let port: u16 = parse_or(&lookup, "APP_PORT", 3000).unwrap();
//! assert_eq!(host, "0.0.0.0");
//! assert_eq!(port, 8081);
//! ```

use std::str::FromStr;

use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 値をパースできない
    #[error("環境変数 {name} の値が不正です: {value:?}")]
    InvalidValue {
        /// 環境変数名
        name:  String,
        /// 設定されていた値
        value: String,
    },
}

/// 環境変数を文字列で読み取る（未設定ならデフォルト値）
pub fn string_or(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    lookup(name).unwrap_or_else(|| default.to_string())
}

/// 環境変数を読み取ってパースする（未設定ならデフォルト値）
///
/// 設定されているがパースできない場合はデフォルトにフォールバックせず、エラーを返す。
pub fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
    }
}
