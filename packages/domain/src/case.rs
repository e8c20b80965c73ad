//! # 案件レコード
//!
//! 呼び出し元が自由な形で渡すフィールドに、システムが 3 つのフィールドを
//! 付与したレコード。スキーマは持たず、任意の JSON 値をそのまま保持する。
//!
//! | フィールド | 内容 |
//! |-----------|------|
//! | `caseId` | 作成時に生成するランダム ID。ストアのキーと一致する |
//! | `status` | 作成時は常に `RECEIVED`（状態遷移は存在しない） |
//! | `createdAt` | 作成時刻の表示用文字列 |
//!
//! 呼び出し元のフィールドにシステムフィールドと同名のキーが含まれる場合、
//! システムの値が優先される。
//!
//! ## 使用例
//!
//! ```rust
//! use casedesk_domain::case::{CaseId, CaseRecord};
//! use serde_json::json;
//!
//! let mut fields = serde_json::Map::new();
//! fields.insert("amount".to_string(), json!(1200));
//! fields.insert("status".to_string(), json!("DONE"));
//!
//! let id = CaseId::new();
//! let record = CaseRecord::new(id.clone(), fields, chrono::Utc::now());
//!
//! let json = serde_json::to_value(&record).unwrap();
//! assert_eq!(json["caseId"], json!(id.as_str()));
//! assert_eq!(json["status"], json!("RECEIVED"));
//! assert_eq!(json["amount"], json!(1200));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

define_random_id! {
    /// 案件の一意識別子
    pub struct CaseId;
}

/// システムが付与するフィールド名
pub const CASE_ID_FIELD: &str = "caseId";
pub const STATUS_FIELD: &str = "status";
pub const CREATED_AT_FIELD: &str = "createdAt";

const SYSTEM_FIELDS: [&str; 3] = [CASE_ID_FIELD, STATUS_FIELD, CREATED_AT_FIELD];

/// 案件ステータス
///
/// 受付時の初期値のみ。状態遷移のロジックは持たない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseStatus {
    /// 受付済み
    #[default]
    Received,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "RECEIVED",
        }
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 案件レコード（エンティティ）
///
/// JSON にシリアライズすると、システムフィールドと呼び出し元のフィールドが
/// 同じ階層に並ぶフラットなオブジェクトになる。
///
/// # 不変条件
///
/// - `fields` にはシステムフィールドと同名のキーが含まれない
/// - 作成後に変更されない（更新メソッドを持たない）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    case_id:    CaseId,
    status:     CaseStatus,
    #[serde(serialize_with = "crate::clock::serialize_display")]
    created_at: DateTime<Utc>,
    #[serde(flatten)]
    fields:     Map<String, Value>,
}

impl CaseRecord {
    /// 新しい案件レコードを作成する
    ///
    /// ステータスは [`CaseStatus::Received`] 固定。
    /// `fields` 内のシステムフィールドと同名のキーは取り除かれる。
    pub fn new(case_id: CaseId, mut fields: Map<String, Value>, created_at: DateTime<Utc>) -> Self {
        for key in SYSTEM_FIELDS {
            fields.remove(key);
        }

        Self {
            case_id,
            status: CaseStatus::Received,
            created_at,
            fields,
        }
    }

    // Getter メソッド

    pub fn id(&self) -> &CaseId {
        &self.case_id
    }

    pub fn status(&self) -> CaseStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 呼び出し元が渡したフィールド（システムフィールドを除く）
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::*;

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap()
    }

    fn fields_of(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("object を期待したが {other} だった"),
        }
    }

    #[rstest]
    fn test_新規作成時のステータスはreceived(now: DateTime<Utc>) {
        let sut = CaseRecord::new(CaseId::new(), Map::new(), now);

        assert_eq!(sut.status(), CaseStatus::Received);
        assert_eq!(sut.created_at(), now);
    }

    #[rstest]
    fn test_シリアライズ結果にシステムフィールドと呼び出し元のフィールドが並ぶ(
        now: DateTime<Utc>,
    ) {
        let id = CaseId::from_string("7d3f1c2e-0000-4000-8000-000000000001");
        let fields = fields_of(json!({
            "borrower": "ACME",
            "amount": 1200,
            "tags": ["Loan", "Rate"],
            "nested": {"ok": true},
            "note": null
        }));

        let sut = CaseRecord::new(id, fields, now);
        let json = serde_json::to_value(&sut).unwrap();

        assert_eq!(
            json,
            json!({
                "caseId": "7d3f1c2e-0000-4000-8000-000000000001",
                "status": "RECEIVED",
                "createdAt": "Mon Oct 19 09:00:00 UTC 2026",
                "borrower": "ACME",
                "amount": 1200,
                "tags": ["Loan", "Rate"],
                "nested": {"ok": true},
                "note": null
            })
        );
    }

    #[rstest]
    #[case::case_id(CASE_ID_FIELD)]
    #[case::status(STATUS_FIELD)]
    #[case::created_at(CREATED_AT_FIELD)]
    fn test_システムフィールドと同名のキーはシステムの値が優先される(
        now: DateTime<Utc>,
        #[case] key: &str,
    ) {
        let mut fields = Map::new();
        fields.insert(key.to_string(), json!("caller-value"));

        let sut = CaseRecord::new(CaseId::new(), fields, now);
        let json = serde_json::to_value(&sut).unwrap();

        assert!(sut.fields().is_empty());
        assert_ne!(json[key], json!("caller-value"));
    }

    #[test]
    fn test_case_idは毎回異なる値で生成される() {
        let first = CaseId::new();
        let second = CaseId::new();

        assert_ne!(first, second);
        assert!(!first.as_str().is_empty());
    }

    #[test]
    fn test_case_idはuuid_v4の正規表現形式で生成される() {
        let id = CaseId::new();
        let parsed = uuid::Uuid::parse_str(id.as_str()).unwrap();

        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.to_string(), id.as_str());
    }

    #[test]
    fn test_case_statusの表示とシリアライズが一致する() {
        assert_eq!(CaseStatus::Received.to_string(), "RECEIVED");
        assert_eq!(
            serde_json::to_value(CaseStatus::Received).unwrap(),
            json!("RECEIVED")
        );
    }
}
