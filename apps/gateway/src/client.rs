//! # 外部 API クライアント
//!
//! Gateway から Prompt Service への通信を担当する。

pub mod prompt_service;

pub use prompt_service::{PromptServiceClient, PromptServiceClientImpl, PromptServiceError};
