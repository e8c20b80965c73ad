//! # ユースケース層
//!
//! Prompt Service のビジネスロジックを実装する。

pub mod prompt;

use async_trait::async_trait;
use casedesk_domain::prompt::AssembledPrompt;
pub use prompt::PromptUseCaseImpl;
use serde_json::{Map, Value};

/// プロンプト組み立てユースケーストレイト
#[async_trait]
pub trait PromptUseCase: Send + Sync {
    /// 設定からプロンプトを組み立てる
    ///
    /// 失敗しない。設定の内容は検証しない。
    async fn assemble(&self, config: Map<String, Value>) -> AssembledPrompt;
}
