use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::agent::{Agent, AgentConfig};
use crate::game::DecisionResponse;
use crate::policy::PolicyConfig;

#[derive(Clone)]
struct AppState {
    agent: Arc<Mutex<Agent>>,
}

impl AppState {
    fn new(config: AgentConfig) -> Self {
        Self {
            agent: Arc::new(Mutex::new(Agent::new(config))),
        }
    }
}

pub async fn serve(addr: SocketAddr, config: AgentConfig) -> Result<()> {
    let app = router(config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("decision server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn router(config: AgentConfig) -> Router {
    let api = Router::new()
        .route("/decide", post(decide))
        .route("/policy", get(policy));

    Router::new()
        .route("/healthz", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(config))
}

async fn health() -> &'static str {
    "ok"
}

async fn policy(State(state): State<AppState>) -> Json<PolicyConfig> {
    Json(state.agent.lock().policy().config().clone())
}

// Raw bytes: any body, even one that is not UTF-8, is answered with a decision.
async fn decide(State(state): State<AppState>, body: Bytes) -> Json<DecisionResponse> {
    match std::str::from_utf8(&body) {
        Ok(raw) => Json(state.agent.lock().respond(raw)),
        Err(err) => {
            warn!(error = %err, "request body is not UTF-8, folding");
            Json(DecisionResponse::fold())
        }
    }
}
