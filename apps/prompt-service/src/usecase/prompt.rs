//! # プロンプト組み立てユースケース

use std::sync::Arc;

use async_trait::async_trait;
use casedesk_domain::{
    clock::Clock,
    prompt::{AssembledPrompt, PromptId},
};
use casedesk_shared::{event_log::event, log_business_event};
use serde_json::{Map, Value};

use super::PromptUseCase;

/// プロンプト組み立てユースケースの実装
pub struct PromptUseCaseImpl {
    clock: Arc<dyn Clock>,
}

impl PromptUseCaseImpl {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl PromptUseCase for PromptUseCaseImpl {
    async fn assemble(&self, config: Map<String, Value>) -> AssembledPrompt {
        let prompt = AssembledPrompt::assemble(&config, PromptId::new(), self.clock.now());

        log_business_event!(
            event.category = event::category::PROMPT,
            event.action = event::action::PROMPT_ASSEMBLED,
            event.entity_type = event::entity_type::PROMPT,
            event.entity_id = %prompt.prompt_id(),
            event.result = event::result::SUCCESS,
            "プロンプトを組み立てました"
        );

        prompt
    }
}

#[cfg(test)]
mod tests {
    use casedesk_domain::{
        clock::FixedClock,
        prompt::{DEFAULT_MODEL, PROMPT_TEMPLATE},
    };
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn sut() -> PromptUseCaseImpl {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 16, 32, 0).unwrap();
        PromptUseCaseImpl::new(Arc::new(FixedClock::new(now)))
    }

    #[tokio::test]
    async fn test_空の設定ではデフォルト値で組み立てる() {
        let prompt = sut().assemble(Map::new()).await;

        assert_eq!(prompt.model(), &json!(DEFAULT_MODEL));
        assert_eq!(prompt.fibo_tags(), &json!(["Loan", "Rate", "Borrower"]));
        assert_eq!(prompt.template(), PROMPT_TEMPLATE);
        assert!(!prompt.prompt_id().as_str().is_empty());
    }

    #[tokio::test]
    async fn test_組み立て時刻は時刻プロバイダから取得する() {
        let prompt = sut().assemble(Map::new()).await;

        assert_eq!(
            prompt.assembled_at(),
            Utc.with_ymd_and_hms(2026, 10, 19, 16, 32, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn test_呼び出しごとに異なるidを生成する() {
        let sut = sut();

        let first = sut.assemble(Map::new()).await;
        let second = sut.assemble(Map::new()).await;

        assert_ne!(first.prompt_id(), second.prompt_id());
    }
}
