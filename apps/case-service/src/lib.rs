//! # Case Service ライブラリ
//!
//! 案件レジストリの設定・ユースケース・ハンドラ・ルーター構築を公開する。
//! `main.rs` と結合テスト（`tests/`）の両方から利用する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
