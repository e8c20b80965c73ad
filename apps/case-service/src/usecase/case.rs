//! # 案件ユースケース
//!
//! 案件レジストリの登録・取得・一覧を実装する。
//!
//! ID は登録ごとに 128 ビットのランダム値から生成する。衝突確率は無視できるため、
//! 生成前の重複チェックは行わない（リポジトリは既存キーを上書きしない）。

use std::sync::Arc;

use async_trait::async_trait;
use casedesk_domain::{
    case::{CaseId, CaseRecord},
    clock::Clock,
};
use casedesk_infra::repository::CaseRepository;
use casedesk_shared::{event_log::event, log_business_event};
use serde_json::{Map, Value};

use super::CaseUseCase;
use crate::error::CaseError;

/// 案件ユースケースの実装
pub struct CaseUseCaseImpl {
    repository: Arc<dyn CaseRepository>,
    clock:      Arc<dyn Clock>,
}

impl CaseUseCaseImpl {
    /// 新しいユースケースインスタンスを作成
    pub fn new(repository: Arc<dyn CaseRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

#[async_trait]
impl CaseUseCase for CaseUseCaseImpl {
    async fn create_case(&self, fields: Map<String, Value>) -> Result<CaseRecord, CaseError> {
        let field_count = fields.len();
        let record = CaseRecord::new(CaseId::new(), fields, self.clock.now());

        self.repository.insert(&record).await?;

        log_business_event!(
            event.category = event::category::CASE,
            event.action = event::action::CASE_CREATED,
            event.entity_type = event::entity_type::CASE,
            event.entity_id = %record.id(),
            event.field_count = field_count,
            event.result = event::result::SUCCESS,
            "案件を登録しました"
        );

        Ok(record)
    }

    async fn get_case(&self, id: &str) -> Result<Option<CaseRecord>, CaseError> {
        let record = self
            .repository
            .find_by_id(&CaseId::from_string(id))
            .await?;
        Ok(record)
    }

    async fn list_cases(&self) -> Result<Vec<CaseRecord>, CaseError> {
        let records = self.repository.find_all().await?;
        Ok(records)
    }
}
