//! # Canonical Log Line ミドルウェア
//!
//! 1 リクエストにつき 1 行、完了時のサマリ（メソッド・パス・ステータス・レイテンシ・
//! Request ID）を出力する tower Layer。
//!
//! ログレベルはステータスで決まる:
//!
//! | ステータス | レベル |
//! |-----------|--------|
//! | 1xx〜4xx | INFO |
//! | 5xx | WARN |
//! | 内側の Service がエラーを返した | ERROR |
//!
//! ヘルスチェックのように頻繁にポーリングされるパスは [`CanonicalLogLineLayer::skip_path`]
//! で除外する。

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
    time::Instant,
};

use http::{Request, Response};
use tower::{Layer, Service};

use crate::observability::REQUEST_ID_HEADER;

/// Canonical Log Line を出力する Layer
///
/// ```text
/// SetRequestIdLayer → TraceLayer → CanonicalLogLineLayer → handler
/// ```
///
/// Request ID を拾うため `SetRequestIdLayer` より内側に置く。
#[derive(Clone, Debug, Default)]
pub struct CanonicalLogLineLayer {
    skipped_paths: Arc<Vec<String>>,
}

impl CanonicalLogLineLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定パス（完全一致）をサマリ出力の対象外にする
    pub fn skip_path(mut self, path: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.skipped_paths).push(path.into());
        self
    }

    fn is_skipped(&self, path: &str) -> bool {
        self.skipped_paths.iter().any(|p| p == path)
    }
}

impl<S> Layer<S> for CanonicalLogLineLayer {
    type Service = CanonicalLogLineService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CanonicalLogLineService {
            inner,
            layer: self.clone(),
        }
    }
}

/// [`CanonicalLogLineLayer`] が生成する Service 実装
#[derive(Clone, Debug)]
pub struct CanonicalLogLineService<S> {
    inner: S,
    layer: CanonicalLogLineLayer,
}

/// 完了時に出力する 1 行分の情報
struct Summary {
    method:     http::Method,
    path:       String,
    request_id: String,
    start:      Instant,
}

impl Summary {
    fn from_request<B>(req: &Request<B>) -> Self {
        Self {
            method:     req.method().clone(),
            path:       req.uri().path().to_owned(),
            request_id: req
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-")
                .to_owned(),
            start:      Instant::now(),
        }
    }

    fn latency_ms(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn emit_response(&self, status: http::StatusCode) {
        let latency_ms = self.latency_ms();
        if status.is_server_error() {
            tracing::warn!(
                log.r#type = "canonical",
                http.method = %self.method,
                http.path = %self.path,
                http.status_code = status.as_u16(),
                http.latency_ms = latency_ms,
                http.request_id = %self.request_id,
                "リクエスト完了（サーバーエラー）"
            );
        } else {
            tracing::info!(
                log.r#type = "canonical",
                http.method = %self.method,
                http.path = %self.path,
                http.status_code = status.as_u16(),
                http.latency_ms = latency_ms,
                http.request_id = %self.request_id,
                "リクエスト完了"
            );
        }
    }

    fn emit_error(&self, err: &dyn std::fmt::Display) {
        tracing::error!(
            log.r#type = "canonical",
            http.method = %self.method,
            http.path = %self.path,
            http.latency_ms = self.latency_ms(),
            http.request_id = %self.request_id,
            error.message = %err,
            "リクエスト処理エラー"
        );
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CanonicalLogLineService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: std::fmt::Display + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // poll_ready 済みの inner を使い、次回用に clone を残す
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        if self.layer.is_skipped(req.uri().path()) {
            return Box::pin(inner.call(req));
        }

        let summary = Summary::from_request(&req);

        Box::pin(async move {
            let result = inner.call(req).await;
            match &result {
                Ok(response) => summary.emit_response(response.status()),
                Err(err) => summary.emit_error(err),
            }
            result
        })
    }
}
