//! Shared application state handed to every `axum` handler.

use std::sync::{Arc, Mutex};

use replichain_core::miner::MineTrigger;
use replichain_core::Engine;
use tokio::sync::mpsc::UnboundedSender;

/// Dependency-injected into every handler via `axum`'s `State` extractor.
///
/// Holds the single engine-wide mutex (§5 of the design) and a channel the
/// handlers use to wake the miner task without ever driving it themselves.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Mutex<Engine>>,
    pub miner_trigger: UnboundedSender<MineTrigger>,
}
