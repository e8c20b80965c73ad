//! # ビジネスイベントログ
//!
//! ログフィールドの命名規約とヘルパーマクロを提供する。
//!
//! [`log_business_event!`] マクロで出力すると `event.kind = "business_event"` マーカーが
//! 自動付与され、`jq 'select(.["event.kind"] == "business_event")'` でフィルタできる。
//!
//! フィールド名はドット記法（`event.category`、`event.action`）を使用する。

/// ビジネスイベントを構造化ログとして出力する。
///
/// `event.kind = "business_event"` マーカーを自動付与し、
/// `tracing::info!` レベルで出力する。
///
/// ## 慣例フィールド
///
/// - `event.category`: [`event::category`] の定数
/// - `event.action`: [`event::action`] の定数
/// - `event.entity_type` / `event.entity_id`: 対象エンティティ
/// - `event.result`: [`event::result`] の定数
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    /// イベントカテゴリ
    pub mod category {
        pub const CASE: &str = "case";
        pub const PROMPT: &str = "prompt";
        pub const DOCUMENT: &str = "document";
    }

    /// イベントアクション
    pub mod action {
        pub const CASE_CREATED: &str = "case.created";
        pub const PROMPT_ASSEMBLED: &str = "prompt.assembled";
        pub const PROMPT_PROXIED: &str = "prompt.proxied";
        pub const DOCUMENT_UPLOADED: &str = "document.uploaded";
    }

    /// エンティティ種別
    pub mod entity_type {
        pub const CASE: &str = "case";
        pub const PROMPT: &str = "prompt";
        pub const DOCUMENT: &str = "document";
    }

    /// イベント結果
    pub mod result {
        pub const SUCCESS: &str = "success";
    }
}

/// エラーコンテキストフィールドの定数
pub mod error {
    /// エラーカテゴリ
    pub mod category {
        /// インフラストラクチャ（インメモリストア、ファイルシステム）
        pub const INFRASTRUCTURE: &str = "infrastructure";
        /// 外部サービス呼び出し（Prompt Service）
        pub const EXTERNAL_SERVICE: &str = "external_service";
    }

    /// エラー種別
    pub mod kind {
        pub const STORE: &str = "store";
        pub const FILE_WRITE: &str = "file_write";
        pub const SERVICE_COMMUNICATION: &str = "service_communication";
    }
}
