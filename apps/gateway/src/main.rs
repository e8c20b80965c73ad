//! # Gateway サーバー
//!
//! クライアントの窓口となる HTTP サーバー。
//!
//! ## 役割
//!
//! - **ドキュメントアップロード**: multipart の `file` パートをディスクに保存する
//! - **プロンプト組み立て**: Prompt Service の `/api/assemble` へ中継する
//!
//! ```text
//! ┌──────────┐     ┌──────────┐     ┌────────────────┐
//! │  Client  │────▶│ Gateway  │────▶│ Prompt Service │
//! └──────────┘     └──────────┘     └────────────────┘
//!                       │
//!                       ▼
//!                  UPLOAD_DIR
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `GATEWAY_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `GATEWAY_PORT` | No | ポート番号（デフォルト: `4000`） |
//! | `PROMPT_SERVICE_URL` | No | Prompt Service の URL（デフォルト: `http://localhost:8080`） |
//! | `PROMPT_SERVICE_TIMEOUT_SECS` | No | 中継のタイムアウト秒数（デフォルト: `60`） |
//! | `UPLOAD_DIR` | No | 保存先ディレクトリ（デフォルト: `/data/uploads`） |

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use casedesk_gateway::{
    app_builder::build_app,
    client::PromptServiceClientImpl,
    config::GatewayConfig,
    handler::{PromptProxyState, UploadState},
};
use casedesk_shared::observability::TracingConfig;
use tokio::net::TcpListener;

/// Gateway サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("gateway");
    casedesk_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "gateway").entered();

    // 設定読み込み
    let config = GatewayConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Gateway サーバーを起動します: {}:{} (prompt-service: {}, upload-dir: {})",
        config.host,
        config.port,
        config.prompt_service_url,
        config.upload_dir.display()
    );

    // 依存コンポーネントを初期化
    let prompt_client = PromptServiceClientImpl::new(
        &config.prompt_service_url,
        config.prompt_service_timeout,
    );
    let prompt_state = Arc::new(PromptProxyState {
        client: Arc::new(prompt_client),
    });
    let upload_state = Arc::new(UploadState {
        upload_dir: config.upload_dir.clone(),
    });

    let app = build_app(upload_state, prompt_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Gateway サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
