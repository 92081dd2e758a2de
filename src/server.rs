//! HTTP surface for the standings
//!
//! - `GET /` - Plain banner
//! - `GET /standings` - The rendered standings page, served from cache when fresh

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use bytes::Bytes;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::service::StandingsService;

const BANNER: &str = "NFL stats API";
const CACHE_CONTROL: &str = "s-maxage=1, stale-while-revalidate";

/// Cached page handed to the response body without copying
struct Artifact(Arc<str>);

impl AsRef<[u8]> for Artifact {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

fn artifact_body(page: Arc<str>) -> Bytes {
    Bytes::from_owner(Artifact(page))
}

/// Builds the router around a shared service
pub fn router(service: Arc<StandingsService>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/standings", get(standings))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Binds `addr` and serves until the process is stopped
pub async fn serve(addr: SocketAddr, service: Arc<StandingsService>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Running on http://{}", listener.local_addr()?);
    axum::serve(listener, router(service)).await
}

async fn home() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/html"),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        BANNER,
    )
}

async fn standings(State(service): State<Arc<StandingsService>>) -> Response {
    match service.standings().await {
        Ok(page) => (
            [
                (header::CONTENT_TYPE, "text/html"),
                (header::CACHE_CONTROL, CACHE_CONTROL),
            ],
            artifact_body(page),
        )
            .into_response(),
        // Already logged by the service
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Internal Server Error" })),
        )
            .into_response(),
    }
}
