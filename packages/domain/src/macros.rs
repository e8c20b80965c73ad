/// ランダム UUID（v4）の正規文字列表現をラップする ID 型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ、serde では素の文字列として扱う）
/// - `derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)`
/// - `new()`: 128 ビットのランダム値から生成（衝突チェックは行わない）
/// - `from_string()`: 外部から受け取った識別子文字列から作成
/// - `as_str()`: 内部文字列への参照
/// - `Default` impl（`new()` に委譲）
///
/// 識別子は不透明な文字列として扱う。外部から受け取った文字列は正規化しないため、
/// 生成時と異なる表記（大文字など）は別の識別子とみなされる。
///
/// # 使用例
///
/// ```rust
/// use casedesk_domain::case::CaseId;
///
/// let id = CaseId::new();
/// let restored = CaseId::from_string(id.as_str());
/// assert_eq!(id, restored);
/// ```
macro_rules! define_random_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[serde(transparent)]
        #[display("{_0}")]
        $vis struct $Name(String);

        impl $Name {
            /// 新しい ID を生成する（UUID v4）
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// 既存の識別子文字列から ID を作成する
            pub fn from_string(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// 内部の文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $Name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
