use actix_web::http::StatusCode;
use actix_web::{get, web, Responder};
use async_trait::async_trait;
use serde::Serialize;

use crate::shared::api::ApiResponse;
use crate::shared::http::ApiClient;
use crate::AppState;

/// Something the site cannot serve pages without.
#[async_trait]
pub trait UpstreamProbe: Send + Sync {
    async fn reachable(&self) -> bool;
}

#[async_trait]
impl UpstreamProbe for ApiClient {
    async fn reachable(&self) -> bool {
        self.probe().await
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    api: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    ApiResponse::success(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks the portfolio API answers at all
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    if data.upstream.reachable().await {
        ApiResponse::success(ReadinessResponse {
            status: "ok",
            api: "ok",
        })
    } else {
        ApiResponse::with_status(
            StatusCode::SERVICE_UNAVAILABLE,
            ReadinessResponse {
                status: "unhealthy",
                api: "unhealthy",
            },
        )
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(readiness);
}
