//! # リポジトリ
//!
//! ドメインエンティティの保存と取得を担当するトレイトと、その実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層はトレイトにのみ依存する
//! - **テスタビリティ**: トレイト経由でスタブに差し替え可能

pub mod case_repository;

pub use case_repository::{CaseRepository, InMemoryCaseRepository};
