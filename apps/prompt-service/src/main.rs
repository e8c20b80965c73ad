//! # Prompt Service サーバー
//!
//! ヘルスチェックとスタブのプロンプト組み立てを提供する HTTP サーバー。
//! 状態を持たず、リクエストの設定をデフォルト値で補完して返すだけである。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `PROMPT_SERVICE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PROMPT_SERVICE_PORT` | No | ポート番号（デフォルト: `8080`） |

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use casedesk_domain::clock::SystemClock;
use casedesk_prompt_service::{
    app_builder::build_app,
    config::PromptServiceConfig,
    handler::PromptState,
    usecase::PromptUseCaseImpl,
};
use casedesk_shared::observability::TracingConfig;
use tokio::net::TcpListener;

/// Prompt Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("prompt-service");
    casedesk_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "prompt-service").entered();

    // 設定読み込み
    let config = PromptServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Prompt Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let prompt_state = Arc::new(PromptState {
        usecase: Arc::new(PromptUseCaseImpl::new(Arc::new(SystemClock))),
    });
    let app = build_app(prompt_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Prompt Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
