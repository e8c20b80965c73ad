//! # HTTP リクエストハンドラ
//!
//! - `health`: ヘルスチェック
//! - `prompt`: プロンプト組み立て

pub mod health;
pub mod prompt;

pub use health::health_check;
pub use prompt::{PromptState, assemble};
