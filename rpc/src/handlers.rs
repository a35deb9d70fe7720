//! The 6 HTTP handlers that make up the node's external surface.
//!
//! Every handler acquires the engine mutex for the shortest possible span —
//! lock, call one `Engine` method, drop the guard, respond — and never holds
//! it across an `.await`. The miner is never driven from here; handlers only
//! ever nudge it awake over `miner_trigger`.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use replichain_core::miner::MineTrigger;
use std::collections::HashMap;

use crate::state::AppState;
use crate::wire::{InformBlockRequest, NewTransactionRequest};

const MISSING_VALUES: &str = "Missing values";
const INVALID_BLOCK: &str = "Invalid block";
const OK: &str = "OK";

pub async fn post_transaction(
    State(app): State<AppState>,
    Json(body): Json<NewTransactionRequest>,
) -> (StatusCode, &'static str) {
    let Some(txn) = body.into_transaction() else {
        return (StatusCode::BAD_REQUEST, MISSING_VALUES);
    };
    app.engine.lock().unwrap().submit_transaction(txn);
    (StatusCode::CREATED, OK)
}

pub async fn post_inform_block(
    State(app): State<AppState>,
    Json(body): Json<InformBlockRequest>,
) -> (StatusCode, &'static str) {
    let Some((block, claimed_hash)) = body.into_block_and_claimed_hash() else {
        return (StatusCode::BAD_REQUEST, MISSING_VALUES);
    };

    let outcome = app.engine.lock().unwrap().ingest_peer_block(block, &claimed_hash);
    match outcome {
        Ok(next_proposer) => {
            if next_proposer.is_some() {
                let _ = app.miner_trigger.send(MineTrigger::Normal);
            }
            (StatusCode::CREATED, OK)
        }
        Err(err) => {
            tracing::warn!(error = %err, "rejected gossiped block");
            (StatusCode::BAD_REQUEST, INVALID_BLOCK)
        }
    }
}

pub async fn get_dump(State(app): State<AppState>) -> Json<replichain_core::Snapshot> {
    Json(app.engine.lock().unwrap().dump())
}

pub async fn get_startexp(State(app): State<AppState>) -> (StatusCode, &'static str) {
    if app.engine.lock().unwrap().is_bootstrap_node() {
        let _ = app.miner_trigger.send(MineTrigger::Genesis);
    }
    (StatusCode::OK, OK)
}

pub async fn get_health() -> (StatusCode, &'static str) {
    (StatusCode::OK, OK)
}

pub async fn get_history(
    State(app): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<(u64, i64)>>, (StatusCode, &'static str)> {
    let account = params.get("account").filter(|s| !s.is_empty()).ok_or((StatusCode::BAD_REQUEST, MISSING_VALUES))?;
    Ok(Json(app.engine.lock().unwrap().history(account)))
}
