//! # Observability 基盤
//!
//! トレーシング初期化、ログ出力形式の設定、Request ID の生成を提供する。
//! 3サービス（Case Service / Prompt Service / Gateway）で共通のログ初期化ロジックを集約し、
//! 環境変数 `LOG_FORMAT` による JSON / Pretty 出力の切り替えに対応する。

/// Request ID を運ぶ HTTP ヘッダー名
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_DIRECTIVES: &str = "info,casedesk=debug";

/// ログ出力形式（`LOG_FORMAT`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 行 1 JSON（本番環境向け）
    Json,
    /// 人間向けの整形出力
    #[default]
    Pretty,
}

impl LogFormat {
    /// 文字列からログ形式を決める
    ///
    /// 前後の空白と大文字小文字は無視する。認識できない値は stderr に警告を出して
    /// [`Pretty`](LogFormat::Pretty) にする（トレーシング初期化前のため `eprintln!` を使う）。
    pub fn parse(s: &str) -> Self {
        let value = s.trim();
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else if value.eq_ignore_ascii_case("pretty") {
            Self::Pretty
        } else {
            eprintln!("WARNING: unknown LOG_FORMAT={s:?}, falling back to pretty");
            Self::Pretty
        }
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// サービス名（起動ログに出力）
    pub service_name: String,
    /// ログ出力形式
    pub log_format:   LogFormat,
    /// `RUST_LOG` が無いときに使う EnvFilter ディレクティブ
    pub directives:   String,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
            directives: DEFAULT_DIRECTIVES.to_string(),
        }
    }

    /// 環境変数から設定を読み取る
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::from_lookup(service_name, |name| std::env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み取る
    ///
    /// `LOG_FORMAT` 未設定なら [`LogFormat::Pretty`]。
    pub fn from_lookup(
        service_name: impl Into<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let log_format = lookup("LOG_FORMAT")
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();
        Self::new(service_name, log_format)
    }
}

/// トレーシングを初期化する
///
/// `RUST_LOG` があればそれを、無ければ [`TracingConfig::directives`] をフィルタに使う。
/// `tracing_error::ErrorLayer` も登録し、インフラ層のエラーが生成時点の `SpanTrace` を
/// 取れるようにする。
///
/// サービス名を JSON ログに載せるには、呼び出し元で
/// `tracing::info_span!("app", service = "...")` に入っておく。
#[cfg(feature = "observability")]
pub fn init_tracing(config: TracingConfig) {
    use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.directives));

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();

    tracing::debug!(
        service = %config.service_name,
        log_format = ?config.log_format,
        "トレーシングを初期化しました"
    );
}

/// HTTP リクエストごとのスパンを作成する
///
/// `TraceLayer::make_span_with` に渡して使用する。
/// `SetRequestIdLayer` より内側に配置すること（Request ID がヘッダーに設定済みである前提）。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// UUID v7 で Request ID を生成する `MakeRequestId` 実装
///
/// クライアントが `X-Request-Id` を送ってきた場合は `SetRequestIdLayer` が
/// その値を優先するため、ここでは生成のみを担当する。
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

#[cfg(feature = "observability")]
impl tower_http::request_id::MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(
        &mut self,
        _request: &http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let value = http::HeaderValue::from_str(&uuid::Uuid::now_v7().to_string()).ok()?;
        Some(tower_http::request_id::RequestId::new(value))
    }
}
