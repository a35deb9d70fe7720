//! Transaction and Block value types.
//!
//! Provides fundamental ledger data structures and their canonical hashing.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// `previous_hash` literal carried by the genesis block.
pub const GENESIS_PREV_HASH: &str = "0xfeedcafe";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
/// A transfer of `amount` from `sender` to `recipient`.
///
/// Carries no signature and no nonce; validity is entirely path-dependent on
/// the state it is applied against (see [`crate::state::State::validate`]).
/// `derive(Ord)` compares fields in declaration order, which is exactly the
/// lexicographic order on `(sender, recipient, amount)` the mempool uses to
/// canonicalize block construction.
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: u64,
}

impl Transaction {
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>, amount: u64) -> Self {
        Self { sender: sender.into(), recipient: recipient.into(), amount }
    }
}

impl fmt::Display for Transaction {
    /// Renders as `T(sender -> recipient: amount)`, the exact byte sequence
    /// the block hash is computed from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T({} -> {}: {})", self.sender, self.recipient, self.amount)
    }
}

/// Renders `txns` as `[T(..), T(..)]` (or `[]` when empty): the bracketed,
/// comma-space-separated list form baked into the block hash preimage.
fn render_transaction_list(txns: &[Transaction]) -> String {
    let mut out = String::from("[");
    for (i, txn) in txns.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&txn.to_string());
    }
    out.push(']');
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A numbered, hash-linked record of an ordered transaction list proposed by
/// `miner`.
///
/// `hash` is computed once at construction time via [`Block::new`] and never
/// recomputed in place; callers that need to re-verify it against content use
/// [`Block::compute_hash`].
pub struct Block {
    pub number: u64,
    pub transactions: Vec<Transaction>,
    pub previous_hash: String,
    pub miner: u64,
    pub hash: String,
}

impl Block {
    /// Constructs a block, computing its canonical hash from the supplied
    /// fields.
    pub fn new(number: u64, transactions: Vec<Transaction>, previous_hash: String, miner: u64) -> Self {
        let hash = Self::compute_hash(number, &transactions, &previous_hash, miner);
        Self { number, transactions, previous_hash, miner, hash }
    }

    /// Builds the genesis block: number 1, no transactions, `previous_hash`
    /// equal to [`GENESIS_PREV_HASH`].
    pub fn genesis(miner: u64) -> Self {
        Self::new(1, Vec::new(), GENESIS_PREV_HASH.to_string(), miner)
    }

    /// Recomputes the SHA-256 hex digest of this block's content from
    /// scratch, independent of the stored `hash` field.
    pub fn recompute_hash(&self) -> String {
        Self::compute_hash(self.number, &self.transactions, &self.previous_hash, self.miner)
    }

    /// Computes the SHA-256 hex digest of the canonical preimage: the
    /// decimal `number`, the bracketed transaction list render, the
    /// `previous_hash` string, and the decimal `miner`, concatenated in that
    /// order with no separators.
    pub fn compute_hash(number: u64, transactions: &[Transaction], previous_hash: &str, miner: u64) -> String {
        let mut hasher = Sha256::new();
        hasher.update(number.to_string().as_bytes());
        hasher.update(render_transaction_list(transactions).as_bytes());
        hasher.update(previous_hash.as_bytes());
        hasher.update(miner.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}
