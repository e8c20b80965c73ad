//! # CaseDesk 共有ユーティリティ
//!
//! CaseDesk の全サービス（Case Service / Prompt Service / Gateway）で
//! 使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, apps）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は持たない（`IntoResponse` 変換は各サービスの責務）
//!
//! ## モジュール構成
//!
//! - [`config`] - 環境変数の読み取りヘルパー
//! - [`health`] - ヘルスチェックのレスポンス型
//! - [`error_response`] - RFC 9457 Problem Details
//! - [`observability`] - トレーシング初期化、Request ID（`observability` feature）
//! - [`canonical_log`] - リクエスト完了サマリログ（`observability` feature）
//! - [`event_log`] - ビジネスイベントログのフィールド定数とマクロ

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod config;
pub mod error_response;
pub mod event_log;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
