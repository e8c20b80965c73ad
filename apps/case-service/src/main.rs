//! # Case Service サーバー
//!
//! 案件レジストリを提供する HTTP サーバー。
//!
//! ## 役割
//!
//! - **案件登録**: 任意形状のフィールドに `caseId` / `status` / `createdAt` を付与して保存
//! - **案件参照**: ID 指定の取得と一覧
//!
//! 保存先はプロセス内のインメモリストアのみで、再起動すると消える。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `CASE_SERVICE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `CASE_SERVICE_PORT` | No | ポート番号（デフォルト: `8081`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p casedesk-case-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use casedesk_case_service::{
    app_builder::build_app,
    config::CaseServiceConfig,
    handler::CaseState,
    usecase::CaseUseCaseImpl,
};
use casedesk_domain::clock::SystemClock;
use casedesk_infra::repository::{CaseRepository, InMemoryCaseRepository};
use casedesk_shared::observability::TracingConfig;
use tokio::net::TcpListener;

/// Case Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("case-service");
    casedesk_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "case-service").entered();

    // 設定読み込み
    let config = CaseServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Case Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // 依存コンポーネントを初期化
    let case_repository: Arc<dyn CaseRepository> = Arc::new(InMemoryCaseRepository::new());
    let case_usecase = CaseUseCaseImpl::new(case_repository, Arc::new(SystemClock));
    let case_state = Arc::new(CaseState {
        usecase: Arc::new(case_usecase),
    });

    let app = build_app(case_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Case Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
