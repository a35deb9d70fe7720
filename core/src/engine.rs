//! The mutex-guarded aggregate of chain + state + mempool + rotation that
//! the RPC and miner layers drive — the in-process contract the distilled
//! design calls "the core".
//!
//! `Engine` intentionally has no knowledge of HTTP, `axum`, or `reqwest`: it
//! exposes the same five operations named in the top-level design (submit
//! transaction, ingest peer block, dump snapshot, query history, mine/start
//! genesis) and nothing else. Callers are expected to share one instance
//! behind an `Arc<Mutex<..>>`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::chain::Chain;
use crate::config::NodeConfig;
use crate::error::ValidationError;
use crate::mempool::Mempool;
use crate::rotation;
use crate::state::State;
use crate::types::{Block, Transaction};
use crate::validator;

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Response shape for [`Engine::dump`], matching the `/dump` RPC payload.
pub struct Snapshot {
    pub chain: Vec<Block>,
    pub pending_transactions: Vec<Transaction>,
    pub state: HashMap<String, u64>,
}

#[derive(Debug)]
pub struct Engine {
    config: NodeConfig,
    chain: Chain,
    state: State,
    mempool: Mempool,
}

impl Engine {
    pub fn new(config: NodeConfig) -> Self {
        Self { config, chain: Chain::new(), state: State::new(), mempool: Mempool::new() }
    }

    pub fn node_id(&self) -> u64 {
        self.config.node_id
    }

    pub fn nodes(&self) -> &[u64] {
        &self.config.nodes
    }

    pub fn block_mine_time(&self) -> u64 {
        self.config.block_mine_time
    }

    pub fn is_bootstrap_node(&self) -> bool {
        self.config.is_bootstrap_node()
    }

    /// Appends a client-submitted transaction to the mempool. Never fails:
    /// validity is path-dependent and re-checked at inclusion time.
    pub fn submit_transaction(&mut self, txn: Transaction) {
        self.mempool.submit(txn);
    }

    /// Builds, applies, and commits the next block this node is
    /// responsible for, then returns it for gossip.
    ///
    /// If the chain is empty this produces the genesis block (ignoring the
    /// mempool, which is always empty for genesis transactions). Otherwise
    /// it snapshots the mempool in canonical order, keeps the subsequence
    /// [`State::validate`] accepts, and defers the rest for the next
    /// proposer's retry.
    pub fn mine_block(&mut self) -> Block {
        let block = match self.chain.tip() {
            None => Block::genesis(self.config.node_id),
            Some(tip) => {
                let sorted = self.mempool.sorted_snapshot();
                let included = self.state.validate(&sorted);
                self.mempool.remove_included(&included);
                Block::new(tip.number + 1, included, tip.hash.clone(), self.config.node_id)
            }
        };
        self.state.apply(&block);
        self.chain.push(block.clone());
        tracing::info!(
            block.number,
            block.hash = %block.hash,
            "mined and committed block locally"
        );
        block
    }

    /// Ingests a block proposed by a peer.
    ///
    /// On success, applies the block and returns the identifier of the node
    /// that should mine next, if that node is `self`. Returns the
    /// validation error unchanged on rejection, with no state mutated.
    pub fn ingest_peer_block(&mut self, block: Block, claimed_hash: &str) -> Result<Option<u64>, ValidationError> {
        validator::is_new_block_valid(&block, claimed_hash, self.chain.tip(), &self.state, &self.config.nodes)?;

        let miner = block.miner;
        self.state.apply(&block);
        self.chain.push(block);

        let next = rotation::next_proposer_after(&self.config.nodes, miner);
        Ok(next.filter(|&id| id == self.config.node_id))
    }

    pub fn history(&self, account: &str) -> Vec<(u64, i64)> {
        self.state.history(account)
    }

    pub fn dump(&self) -> Snapshot {
        Snapshot {
            chain: self.chain.blocks().to_vec(),
            pending_transactions: self.mempool.sorted_snapshot(),
            state: self.state.balances(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(node_id: u64) -> Engine {
        Engine::new(NodeConfig::builder().node_id(node_id).nodes(vec![5001, 5002, 5003]).block_mine_time(0).finish())
    }

    #[test]
    fn mining_genesis_seeds_state() {
        let mut e = engine(5001);
        let block = e.mine_block();
        assert_eq!(block.number, 1);
        assert_eq!(block.miner, 5001);
        assert_eq!(e.dump().state.get("A"), Some(&10_000));
    }

    #[test]
    fn mining_includes_and_removes_affordable_transactions() {
        let mut e = engine(5001);
        e.mine_block(); // genesis
        e.submit_transaction(Transaction::new("A", "B", 5_000));
        let block = e.mine_block();
        assert_eq!(block.transactions, vec![Transaction::new("A", "B", 5_000)]);
        assert_eq!(e.dump().pending_transactions.len(), 0);
        assert_eq!(e.dump().state.get("A"), Some(&5_000));
        assert_eq!(e.dump().state.get("B"), Some(&5_000));
    }

    #[test]
    fn unaffordable_transaction_stays_pending() {
        let mut e = engine(5001);
        e.mine_block(); // genesis
        e.submit_transaction(Transaction::new("A", "B", 4_000));
        e.submit_transaction(Transaction::new("A", "D", 6_500));
        e.submit_transaction(Transaction::new("B", "C", 1_000));
        e.submit_transaction(Transaction::new("C", "A", 500));
        let block = e.mine_block();
        assert_eq!(block.transactions.len(), 3);
        assert_eq!(e.dump().pending_transactions, vec![Transaction::new("A", "D", 6_500)]);
    }

    #[test]
    fn ingest_peer_block_advances_rotation() {
        let mut node2 = engine(5002);
        let mut node1 = engine(5001);
        let genesis = node1.mine_block();
        let next = node2.ingest_peer_block(genesis.clone(), &genesis.hash).unwrap();
        // node2 (5002) is the next proposer after 5001.
        assert_eq!(next, Some(5002));
    }

    #[test]
    fn ingest_peer_block_rejects_bad_hash() {
        let mut node1 = engine(5001);
        let genesis = node1.mine_block();
        let mut node2 = engine(5002);
        let err = node2.ingest_peer_block(genesis, "bogus").unwrap_err();
        assert_eq!(err, ValidationError::HashMismatch);
    }

    #[test]
    fn bootstrap_node_is_min_identifier() {
        assert!(engine(5001).is_bootstrap_node());
        assert!(!engine(5002).is_bootstrap_node());
    }
}
