//! Wire-level JSON shapes for the `/transactions/new` and `/inform/block`
//! bodies.
//!
//! These mirror the encoded-block/transaction shapes named in the design
//! doc exactly, but with every field `Option<..>` so a missing field can be
//! reported as the spec's `"Missing values"` 400 rather than surfacing as
//! a generic `serde` deserialization error (which `axum::Json<Block>` would
//! produce by rejecting the whole body before a handler ever runs).

use replichain_core::types::Transaction;
use replichain_core::Block;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NewTransactionRequest {
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub amount: Option<u64>,
}

impl NewTransactionRequest {
    pub fn into_transaction(self) -> Option<Transaction> {
        Some(Transaction::new(self.sender?, self.recipient?, self.amount?))
    }
}

#[derive(Debug, Deserialize)]
pub struct LooseTransaction {
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub amount: Option<u64>,
}

impl LooseTransaction {
    fn into_transaction(self) -> Option<Transaction> {
        Some(Transaction::new(self.sender?, self.recipient?, self.amount?))
    }
}

#[derive(Debug, Deserialize)]
pub struct InformBlockRequest {
    pub number: Option<u64>,
    pub transactions: Option<Vec<LooseTransaction>>,
    pub previous_hash: Option<String>,
    pub miner: Option<u64>,
    pub hash: Option<String>,
}

impl InformBlockRequest {
    /// Decodes into a [`Block`] plus the separately-claimed hash, or `None`
    /// if any required field (including any transaction's fields) is
    /// absent, matching the spec's required-field list for `/inform/block`.
    pub fn into_block_and_claimed_hash(self) -> Option<(Block, String)> {
        let number = self.number?;
        let previous_hash = self.previous_hash?;
        let miner = self.miner?;
        let hash = self.hash?;
        let mut transactions = Vec::with_capacity(self.transactions.as_ref().map_or(0, Vec::len));
        for loose in self.transactions? {
            transactions.push(loose.into_transaction()?);
        }
        Some((Block { number, transactions, previous_hash, miner, hash: hash.clone() }, hash))
    }
}
