//! # ユースケース層
//!
//! Case Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: ハンドラテストでスタブに差し替えられるようトレイトを定義
//! - **依存性注入**: リポジトリと時刻プロバイダを外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約

pub mod case;

use async_trait::async_trait;
use casedesk_domain::case::CaseRecord;
pub use case::CaseUseCaseImpl;
use serde_json::{Map, Value};

use crate::error::CaseError;

/// 案件ユースケーストレイト
#[async_trait]
pub trait CaseUseCase: Send + Sync {
    /// 案件を登録する
    ///
    /// 入力フィールドは検証しない。ID・ステータス・作成日時を付与したレコードを返す。
    async fn create_case(&self, fields: Map<String, Value>) -> Result<CaseRecord, CaseError>;

    /// ID で案件を取得する
    ///
    /// ## 戻り値
    ///
    /// - `Ok(Some(record))`: 登録済みの案件
    /// - `Ok(None)`: 該当する案件がない
    async fn get_case(&self, id: &str) -> Result<Option<CaseRecord>, CaseError>;

    /// 登録済みの全案件を取得する（順序は保証しない）
    async fn list_cases(&self) -> Result<Vec<CaseRecord>, CaseError>;
}
