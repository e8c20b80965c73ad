//! # Clock（時刻プロバイダ）
//!
//! ユースケース層での `Utc::now()` 直接呼び出しを置き換え、
//! テストで固定時刻を注入可能にするための抽象化。
//!
//! 案件の `createdAt` やプロンプトの `assembledAt` はクライアントに
//! 表示用文字列（例: `Mon Oct 19 16:32:00 UTC 2026`）として返す。

use chrono::{DateTime, Utc};
use serde::Serializer;

/// 表示用タイムスタンプのフォーマット
pub const DISPLAY_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 実際のシステム時刻を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 固定時刻を返すテスト用実装
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// 日時を表示用文字列に変換する
pub fn to_display_string(at: &DateTime<Utc>) -> String {
    at.format(DISPLAY_FORMAT).to_string()
}

/// `#[serde(serialize_with = ...)]` 用: 日時を表示用文字列としてシリアライズする
pub fn serialize_display<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_display_string(at))
}
