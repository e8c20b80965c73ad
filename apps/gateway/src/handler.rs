//! # HTTP リクエストハンドラ
//!
//! - `health`: ヘルスチェック
//! - `upload`: ドキュメントアップロード
//! - `prompt`: Prompt Service へのプロキシ

pub mod health;
pub mod prompt;
pub mod upload;

pub use health::{GatewayHealthResponse, health_check};
pub use prompt::{PromptProxyState, assemble_prompt};
pub use upload::{FILE_FIELD, UploadResponse, UploadState, upload};
