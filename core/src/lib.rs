//! replichain Core Library
//!
//! The replicated ledger engine: block/transaction types with canonical
//! hashing, account-balance state with delta history, the mempool, the
//! round-robin proposer schedule, the block validator, the mining
//! procedure, and the [`Engine`] aggregate that ties them together.
//!
//! This crate knows nothing about HTTP, CLI parsing, or process
//! supervision — those live in `replichain-rpc`, `replichain-cli`, and
//! `replichain-network` respectively. It exposes exactly the in-process
//! contract those outer crates drive: submit a transaction, ingest a peer
//! block, mine/commit the next block, dump a snapshot, and query history.

pub mod chain;
pub mod config;
pub mod engine;
pub mod error;
pub mod mempool;
pub mod miner;
pub mod rotation;
pub mod state;
pub mod types;
pub mod validator;

pub use config::NodeConfig;
pub use engine::{Engine, Snapshot};
pub use error::{Result, ValidationError};
pub use miner::MineTrigger;
pub use types::{Block, Transaction, GENESIS_PREV_HASH};
