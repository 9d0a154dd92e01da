//! HTTP front end using Axum.
//!
//! Every request, whatever its method or path, goes through one handler:
//! [`dispatch::decide`] picks redirect, 404 or proxy, and proxied requests
//! are fetched upstream and relayed. Failures become responses here; nothing
//! escapes to the accept loop.

pub mod dispatch;
mod relay;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::{header, HeaderMap, Uri};
use axum::response::Response;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::RegistryConfig;
use crate::fetch::{self, FetchOptions};
use crate::package::Resolver;

use dispatch::Dispatch;

/// Application state shared across requests. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<Resolver>,
    pub homepage: Arc<str>,
    pub fetch: Arc<FetchOptions>,
}

impl AppState {
    pub fn new(resolver: Resolver, config: &RegistryConfig) -> Self {
        Self {
            resolver: Arc::new(resolver),
            homepage: Arc::from(config.homepage.as_str()),
            fetch: Arc::new(FetchOptions::from_config(&config.fetch)),
        }
    }
}

/// Router with the catch-all handler and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .fallback(handle)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let path = uri.path();

    let decision = dispatch::decide(path, user_agent, &state.resolver, &state.homepage);
    tracing::debug!(path, ?decision, "dispatch");

    match decision {
        Dispatch::Homepage(url) | Dispatch::Repository(url) => relay::moved_permanently(&url),
        Dispatch::NotFound => relay::not_found(),
        Dispatch::Proxy(url) => match fetch::get(&url, &state.fetch).await {
            Ok(upstream) => relay::upstream(upstream),
            Err(e) => {
                tracing::warn!(%url, "upstream fetch failed: {e}");
                relay::internal_error(&e.to_string())
            }
        },
    }
}

/// Serves `state` on an already bound listener until `shutdown` resolves.
pub async fn serve_with_shutdown<F>(
    listener: tokio::net::TcpListener,
    state: AppState,
    shutdown: F,
) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")
}

/// Binds `config.listen_addr()` and serves until Ctrl-C.
pub async fn run(config: &RegistryConfig, resolver: Resolver) -> Result<()> {
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    tracing::info!(bind = %addr, "denoreg listening");

    serve_with_shutdown(listener, AppState::new(resolver, config), shutdown_signal()).await?;

    tracing::info!("denoreg stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
