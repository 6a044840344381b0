//! Axum router and server setup.
//! Used by: main.

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::cors;
use crate::error::{Error, Result};
use crate::handlers;

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .layer(cors::permissive_with_credentials())
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })
}

pub async fn serve(listener: TcpListener) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("listening on {}", addr);
    }
    axum::serve(listener, build_router()).await?;
    Ok(())
}

pub async fn run(config: ServerConfig) -> Result<()> {
    let listener = bind(config.socket_addr()).await?;
    serve(listener).await
}
