//! Health check endpoint.
//! Used by: server.

use axum::Json;
use serde::Serialize;

use crate::config::SERVICE_NAME;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthStatus {
    pub const OK: Self = Self { status: "ok", service: SERVICE_NAME };
}

pub async fn health() -> Json<HealthStatus> {
    tracing::debug!("health probe");
    Json(HealthStatus::OK)
}
