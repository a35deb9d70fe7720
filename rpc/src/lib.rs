//! HTTP transport for a replichain node.
//!
//! Translates the 6 endpoints onto [`Engine`](replichain_core::Engine) calls
//! behind a single shared mutex. The router built here is framework-agnostic
//! from the caller's perspective: `replichain-cli` owns the listener, the
//! miner task, and gossip; this crate only owns request/response shape.

pub mod handlers;
pub mod state;
pub mod wire;

use axum::routing::{get, post};
use axum::Router;

pub use state::AppState;

/// Builds the router wiring every endpoint to its handler and `app` state.
pub fn router(app: AppState) -> Router {
    Router::new()
        .route("/transactions/new", post(handlers::post_transaction))
        .route("/inform/block", post(handlers::post_inform_block))
        .route("/dump", get(handlers::get_dump))
        .route("/startexp/", get(handlers::get_startexp))
        .route("/health", get(handlers::get_health))
        .route("/history", get(handlers::get_history))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(app)
}
