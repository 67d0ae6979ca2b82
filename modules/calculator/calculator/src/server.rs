//! HTTP server for the calculator REST surface.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use calculator_sdk::CalculatorApi;
use http::{HeaderName, StatusCode};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api::rest;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Transport settings for `serve`.
#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub bind_addr: SocketAddr,
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
}

/// Build the full router: routes plus the middleware stack.
#[must_use]
pub fn build_router(calculator: Arc<dyn CalculatorApi>, opts: &ServerOptions) -> Router {
    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // Layer registration order is the reverse of execution order:
    //   1. SetRequestId
    //   2. PropagateRequestId
    //   3. Trace
    //   4. Timeout
    //   5. BodyLimit
    //   6. Router
    rest::register_routes(Router::new(), calculator)
        .layer(RequestBodyLimitLayer::new(opts.body_limit_bytes))
        .layer(DefaultBodyLimit::max(opts.body_limit_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            opts.request_timeout,
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<axum::body::Body>| {
                let rid = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    request_id = %rid,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
}

/// Bind `opts.bind_addr` and serve until `cancel` fires.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(
    calculator: Arc<dyn CalculatorApi>,
    opts: ServerOptions,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(opts.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", opts.bind_addr))?;
    serve_on(listener, calculator, &opts, cancel).await
}

/// Serve on an already bound listener until `cancel` fires.
///
/// # Errors
/// Returns an error if the server fails.
pub async fn serve_on(
    listener: TcpListener,
    calculator: Arc<dyn CalculatorApi>,
    opts: &ServerOptions,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let router = build_router(calculator, opts);
    let addr = listener.local_addr()?;
    tracing::info!("HTTP server bound on {}", addr);

    let shutdown = async move {
        cancel.cancelled().await;
        tracing::info!("HTTP server shutting down gracefully (cancellation)");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
