//! # Gateway ライブラリ
//!
//! Prompt Service へのプロキシとドキュメントアップロードを担う Gateway の
//! 設定・クライアント・ミドルウェア・ハンドラ・ルーター構築を公開する。

pub mod app_builder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
