//! # CaseRepository
//!
//! 案件レコードの保持を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **単一の所有者**: ストア（マップ）はリポジトリ内に閉じ、外部に公開しない
//! - **上書き禁止**: 既存キーへの挿入は `Conflict` を返し、既存レコードを保持する
//! - **スナップショット読み取り**: `find_all` は読み取りロック下で複製した一覧を返すため、
//!   部分的に構築されたレコードが返ることはない
//!
//! 追加・取得・一覧のみを提供する。更新・削除・検索条件・ページングは持たない。

use std::{
    collections::{HashMap, hash_map::Entry},
    sync::RwLock,
};

use async_trait::async_trait;
use casedesk_domain::case::{CaseId, CaseRecord};

use crate::error::InfraError;

/// 案件リポジトリトレイト
#[async_trait]
pub trait CaseRepository: Send + Sync {
    /// 案件を挿入する
    ///
    /// 同じ ID のレコードが既に存在する場合は `Conflict` を返し、既存レコードは変更しない。
    async fn insert(&self, record: &CaseRecord) -> Result<(), InfraError>;

    /// ID で案件を検索する
    async fn find_by_id(&self, id: &CaseId) -> Result<Option<CaseRecord>, InfraError>;

    /// 全案件を取得する（順序は保証しない）
    async fn find_all(&self) -> Result<Vec<CaseRecord>, InfraError>;
}

/// インメモリ実装の CaseRepository
///
/// プロセスの生存期間中だけレコードを保持する。退避・期限切れは行わない。
#[derive(Debug, Default)]
pub struct InMemoryCaseRepository {
    cases: RwLock<HashMap<CaseId, CaseRecord>>,
}

impl InMemoryCaseRepository {
    /// 空のリポジトリを作成する
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CaseRepository for InMemoryCaseRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(case_id = %record.id()))]
    async fn insert(&self, record: &CaseRecord) -> Result<(), InfraError> {
        let mut cases = self
            .cases
            .write()
            .map_err(|_| InfraError::lock_poisoned("cases"))?;

        match cases.entry(record.id().clone()) {
            Entry::Occupied(_) => Err(InfraError::conflict("Case", record.id().as_str())),
            Entry::Vacant(entry) => {
                entry.insert(record.clone());
                Ok(())
            }
        }
    }

    #[tracing::instrument(skip_all, level = "debug", fields(case_id = %id))]
    async fn find_by_id(&self, id: &CaseId) -> Result<Option<CaseRecord>, InfraError> {
        let cases = self
            .cases
            .read()
            .map_err(|_| InfraError::lock_poisoned("cases"))?;

        Ok(cases.get(id).cloned())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<CaseRecord>, InfraError> {
        let cases = self
            .cases
            .read()
            .map_err(|_| InfraError::lock_poisoned("cases"))?;

        Ok(cases.values().cloned().collect())
    }
}
