//! # CaseDesk インフラ層
//!
//! 状態の保持を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! リポジトリトレイトと、その具体的な実装を提供する。
//! 現在の実装はプロセス内のインメモリストアのみで、プロセス終了とともに状態は失われる。
//! ユースケース層はトレイト経由でのみストアにアクセスするため、
//! 永続化層を追加してもユースケースは変更不要。
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと実装
//!
//! ## 使用例
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use casedesk_infra::repository::{CaseRepository, InMemoryCaseRepository};
//!
//! let repository: Arc<dyn CaseRepository> = Arc::new(InMemoryCaseRepository::new());
//! ```

pub mod error;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
