//! Mining trigger and the blocking mine-then-commit procedure.
//!
//! The miner is dormant until triggered by either an external genesis
//! command or a successful peer-block ingestion that designates this node
//! as the next proposer. [`mine_and_commit`] models the teacher crate's
//! naive, single-threaded `Block::mine` loop: a plain blocking function, run
//! from a dedicated OS thread (or an async executor's blocking-thread pool)
//! rather than given its own async runtime dependency here.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::engine::Engine;
use crate::types::Block;

/// What woke the miner up. Both variants run the identical procedure below
/// — [`Engine::mine_block`] already branches on an empty chain to produce
/// genesis — the distinction exists only so callers can log why a node
/// started mining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MineTrigger {
    /// The `/startexp/` bootstrap command.
    Genesis,
    /// This node was designated the next proposer after ingesting a peer block.
    Normal,
}

/// Sleeps for the configured mining interval, then builds, applies, and
/// commits the next block under `engine`'s lock, returning it for gossip.
///
/// The sleep happens *before* acquiring the lock so concurrent RPC handlers
/// (transaction submission, dumps, peer-block ingestion) are never blocked
/// waiting on the miner's timer — only the brief block-construction step
/// takes the lock.
pub fn mine_and_commit(engine: &Arc<Mutex<Engine>>, trigger: MineTrigger) -> Block {
    let block_mine_time = engine.lock().expect("engine mutex poisoned").block_mine_time();
    tracing::info!(?trigger, block_mine_time, "miner triggered, waiting for mempool to fill");
    thread::sleep(Duration::from_secs(block_mine_time));

    let mut locked = engine.lock().expect("engine mutex poisoned");
    locked.mine_block()
}
