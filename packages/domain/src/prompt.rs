//! # プロンプト組み立て
//!
//! 呼び出し元の設定をエコーし、未指定の項目をデフォルト値で補完したうえで、
//! 固定のプロンプトテンプレートと生成 ID を付与する。
//! 永続化もバリデーションも行わない純粋な変換。
//!
//! | 出力フィールド | 値 |
//! |---------------|-----|
//! | `promptId` | 毎回生成するランダム ID |
//! | `model` | 設定の `model`（未指定なら [`DEFAULT_MODEL`]） |
//! | `fiboTags` | 設定の `fiboTags`（未指定なら [`DEFAULT_FIBO_TAGS`]） |
//! | `template` | [`PROMPT_TEMPLATE`] |
//! | `assembledAt` | 組み立て時刻の表示用文字列 |
//!
//! 設定にキーが存在する場合は、値の型にかかわらずそのまま採用する（`null` も含む）。

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

define_random_id! {
    /// 組み立てたプロンプトの一意識別子
    pub struct PromptId;
}

/// `model` 未指定時のモデル名
pub const DEFAULT_MODEL: &str = "mistral:tiny";

/// `fiboTags` 未指定時のタグ（FIBO オントロジーの概念名）
pub const DEFAULT_FIBO_TAGS: [&str; 3] = ["Loan", "Rate", "Borrower"];

/// 固定のプロンプトテンプレート
pub const PROMPT_TEMPLATE: &str =
    "You are a document QA engine. Use provided context and answer strictly in JSON.";

const MODEL_KEY: &str = "model";
const FIBO_TAGS_KEY: &str = "fiboTags";

/// 組み立て済みプロンプト
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssembledPrompt {
    prompt_id:    PromptId,
    model:        Value,
    fibo_tags:    Value,
    template:     String,
    #[serde(serialize_with = "crate::clock::serialize_display")]
    assembled_at: DateTime<Utc>,
}

impl AssembledPrompt {
    /// 設定からプロンプトを組み立てる
    ///
    /// `model` / `fiboTags` 以外のキーは出力に含めない。
    pub fn assemble(config: &Map<String, Value>, prompt_id: PromptId, now: DateTime<Utc>) -> Self {
        let model = config
            .get(MODEL_KEY)
            .cloned()
            .unwrap_or_else(|| Value::from(DEFAULT_MODEL));
        let fibo_tags = config
            .get(FIBO_TAGS_KEY)
            .cloned()
            .unwrap_or_else(|| Value::from(DEFAULT_FIBO_TAGS.to_vec()));

        Self {
            prompt_id,
            model,
            fibo_tags,
            template: PROMPT_TEMPLATE.to_string(),
            assembled_at: now,
        }
    }

    pub fn prompt_id(&self) -> &PromptId {
        &self.prompt_id
    }

    pub fn model(&self) -> &Value {
        &self.model
    }

    pub fn fibo_tags(&self) -> &Value {
        &self.fibo_tags
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn assembled_at(&self) -> DateTime<Utc> {
        self.assembled_at
    }
}
