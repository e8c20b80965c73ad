//! # CaseDesk ドメイン層
//!
//! 案件レジストリとプロンプト組み立てのドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! apps → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（インメモリストア、HTTP クライアント）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`case`] - 案件レコード（任意フィールド + システム付与フィールド）
//! - [`prompt`] - プロンプト組み立て（設定のエコー + デフォルト値の補完）
//! - [`clock`] - 時刻プロバイダと表示用タイムスタンプ
//!
//! ## 使用例
//!
//! ```rust
//! use casedesk_domain::case::{CaseId, CaseRecord, CaseStatus};
//!
//! let mut fields = serde_json::Map::new();
//! fields.insert("borrower".to_string(), serde_json::json!("ACME"));
//!
//! let record = CaseRecord::new(CaseId::new(), fields, chrono::Utc::now());
//! assert_eq!(record.status(), CaseStatus::Received);
//! ```

#[macro_use]
mod macros;

pub mod case;
pub mod clock;
pub mod prompt;
