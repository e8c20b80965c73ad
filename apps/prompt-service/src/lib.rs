//! # Prompt Service ライブラリ
//!
//! プロンプト組み立ての設定・ユースケース・ハンドラ・ルーター構築を公開する。

pub mod app_builder;
pub mod config;
pub mod handler;
pub mod usecase;
