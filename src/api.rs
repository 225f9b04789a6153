//! HTTP surface: the poll/info endpoints callers actually hit.
//!
//! Wire behavior matches the classic mining-pool convention: every outcome
//! is an HTTP 200 JSON body, and errors travel as `{"error": "..."}` rather
//! than status codes, so dumb pollers can treat all three projections
//! uniformly.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::Method;
use axum::http::header::HeaderName;
use axum::response::Json;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::engine::MiningPool;
use crate::error::Result;
use crate::model::JobState;
use crate::runner::Runner;

/// Static capability metadata returned by /v1/info.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub name: String,
    pub demand: String,
    pub max_bits: u32,
}

pub struct ApiState<R> {
    pool: Arc<MiningPool<R>>,
    info: Arc<ServerInfo>,
}

impl<R> Clone for ApiState<R> {
    fn clone(&self) -> Self {
        Self {
            pool: Arc::clone(&self.pool),
            info: Arc::clone(&self.info),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PollParams {
    base_public_key: String,
    prefix: String,
}

/// Build the router. Split out from [`serve`] so tests can drive it against
/// an ephemeral listener.
pub fn router<R: Runner>(pool: Arc<MiningPool<R>>, info: ServerInfo) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([HeaderName::from_static("x-requested-with")]);

    Router::new()
        .route("/v1/info", get(info_route::<R>))
        .route("/v1/poll", get(poll_route::<R>))
        .layer(cors)
        .with_state(ApiState {
            pool,
            info: Arc::new(info),
        })
}

/// Bind and serve until ctrl-c.
pub async fn serve<R: Runner>(pool: Arc<MiningPool<R>>, info: ServerInfo, port: u16) -> Result<()> {
    let app = router(pool, info);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("shutting down");
        })
        .await?;
    Ok(())
}

async fn info_route<R: Runner>(State(state): State<ApiState<R>>) -> Json<ServerInfo> {
    Json((*state.info).clone())
}

/// Query-or-submit. Missing params fall through as empty strings and fail
/// validation, same as any other malformed input.
async fn poll_route<R: Runner>(
    State(state): State<ApiState<R>>,
    Query(params): Query<PollParams>,
) -> Json<JobState> {
    let job = match state.pool.poll(&params.base_public_key, &params.prefix) {
        Ok(job) => job,
        // Synchronous rejections share the Failed wire shape but are never
        // stored — nothing was created for this identity.
        Err(err) => JobState::Failed {
            error: err.to_string(),
        },
    };
    Json(job)
}
