//! Account-balance state for **replichain**.
//!
//! The state tracks a mapping from account identifier to integer balance,
//! plus a per-account history of signed balance deltas, one entry per block
//! that touched the account. Blocks are applied *sequentially*; a block must
//! already have passed [`crate::validator::is_new_block_valid`] before it
//! reaches [`State::apply`] — this module does not re-validate.
//!
//! Glossary
//! --------
//! * **Touched account** — sender or recipient of any transaction in a
//!   block, plus the genesis-seeded account `A` in block 1.
//! * **Delta** — `balance_after − balance_before` for a touched account in a
//!   given block, with `balance_before = 0` for a newly created account.
use std::collections::HashMap;

use crate::types::{Block, Transaction};

/// Account identifier that genesis seeds with an initial balance.
pub const GENESIS_ACCOUNT: &str = "A";
/// Balance seeded into [`GENESIS_ACCOUNT`] when block 1 is applied.
pub const GENESIS_BALANCE: u64 = 10_000;

#[derive(Debug, Clone, Default)]
/// In-memory account balances and per-account delta history.
pub struct State {
    accounts: HashMap<String, u64>,
    history: HashMap<String, Vec<(u64, i64)>>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the subsequence of `txns` that is applicable in order against
    /// the current balances, without mutating `self` or `txns`.
    ///
    /// For each transaction in input order: if the sender is unknown, skip
    /// it; if the recipient is unknown, treat it as starting at 0; if the
    /// sender's working balance is insufficient, skip it; otherwise debit
    /// the sender, credit the recipient in the working copy, and keep the
    /// transaction.
    pub fn validate(&self, txns: &[Transaction]) -> Vec<Transaction> {
        let mut working = self.accounts.clone();
        let mut result = Vec::new();
        for txn in txns {
            let Some(&sender_balance) = working.get(&txn.sender) else {
                continue;
            };
            if sender_balance < txn.amount {
                continue;
            }
            *working.get_mut(&txn.sender).expect("sender balance checked above") -= txn.amount;
            *working.entry(txn.recipient.clone()).or_insert(0) += txn.amount;
            result.push(txn.clone());
        }
        result
    }

    /// Applies `block`'s transactions to the real state and records history.
    ///
    /// Caller must ensure `block` has already passed validation. If
    /// `block.number == 1`, seeds [`GENESIS_ACCOUNT`] with [`GENESIS_BALANCE`]
    /// before applying the (empty) genesis transaction list, and treats the
    /// genesis account as touched even though it is not a transaction
    /// participant.
    pub fn apply(&mut self, block: &Block) {
        let mut touched = Vec::new();
        let mut before = HashMap::new();

        if block.number == 1 {
            before.insert(GENESIS_ACCOUNT.to_string(), 0u64);
            touched.push(GENESIS_ACCOUNT.to_string());
            self.accounts.insert(GENESIS_ACCOUNT.to_string(), GENESIS_BALANCE);
        }

        for txn in &block.transactions {
            before.entry(txn.sender.clone()).or_insert_with(|| self.balance(&txn.sender));
            before.entry(txn.recipient.clone()).or_insert_with(|| self.balance(&txn.recipient));
            if !touched.contains(&txn.sender) {
                touched.push(txn.sender.clone());
            }
            if !touched.contains(&txn.recipient) {
                touched.push(txn.recipient.clone());
            }

            *self.accounts.get_mut(&txn.sender).expect("sender exists: block was validated") -= txn.amount;
            *self.accounts.entry(txn.recipient.clone()).or_insert(0) += txn.amount;
        }

        for account in touched {
            let before_balance = before.get(&account).copied().unwrap_or(0);
            let after_balance = self.balance(&account);
            let delta = after_balance as i64 - before_balance as i64;
            self.history.entry(account).or_default().push((block.number, delta));
        }

        tracing::info!(
            block.number,
            block.hash = %block.hash,
            transactions = block.transactions.len(),
            "block applied to state"
        );
    }

    /// Current balance for `account`, or 0 if unknown.
    pub fn balance(&self, account: &str) -> u64 {
        self.accounts.get(account).copied().unwrap_or(0)
    }

    /// Stored `(block_number, delta)` history for `account`, or empty if
    /// the account was never touched.
    pub fn history(&self, account: &str) -> Vec<(u64, i64)> {
        self.history.get(account).cloned().unwrap_or_default()
    }

    /// A snapshot of all known account balances, for [`dump`][crate::engine::Engine::dump].
    pub fn balances(&self) -> HashMap<String, u64> {
        self.accounts.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genesis_state() -> State {
        let mut state = State::new();
        state.apply(&Block::genesis(5001));
        state
    }

    #[test]
    fn genesis_seeds_account_a() {
        let state = genesis_state();
        assert_eq!(state.balance("A"), 10_000);
        assert_eq!(state.history("A"), vec![(1, 10_000)]);
    }

    #[test]
    fn validate_skips_unknown_sender() {
        let state = genesis_state();
        let txns = vec![Transaction::new("Z", "A", 10)];
        assert!(state.validate(&txns).is_empty());
    }

    #[test]
    fn validate_skips_insufficient_balance() {
        let state = genesis_state();
        let txns = vec![Transaction::new("A", "B", 20_000)];
        assert!(state.validate(&txns).is_empty());
    }

    #[test]
    fn validate_does_not_mutate_real_state() {
        let state = genesis_state();
        let txns = vec![Transaction::new("A", "B", 5_000)];
        let valid = state.validate(&txns);
        assert_eq!(valid.len(), 1);
        assert_eq!(state.balance("A"), 10_000);
        assert_eq!(state.balance("B"), 0);
    }

    #[test]
    fn validate_is_sequential_and_path_dependent() {
        // Second transaction only becomes affordable after the first runs.
        let mut state = State::new();
        state.apply(&Block::genesis(5001));
        let txns = vec![
            Transaction::new("A", "B", 6_000),
            Transaction::new("B", "C", 3_000),
        ];
        let valid = state.validate(&txns);
        assert_eq!(valid.len(), 2);
    }

    #[test]
    fn apply_records_delta_not_balance() {
        let mut state = genesis_state();
        let block2 = Block::new(2, vec![Transaction::new("A", "B", 5_000)], "irrelevant".into(), 5002);
        state.apply(&block2);
        assert_eq!(state.balance("A"), 5_000);
        assert_eq!(state.balance("B"), 5_000);
        assert_eq!(state.history("A"), vec![(1, 10_000), (2, -5_000)]);
        assert_eq!(state.history("B"), vec![(2, 5_000)]);
    }

    #[test]
    fn untouched_account_has_no_entry_for_unrelated_block() {
        let mut state = genesis_state();
        let block2 = Block::new(2, vec![Transaction::new("A", "B", 5_000)], "irrelevant".into(), 5002);
        state.apply(&block2);
        let block3 = Block::new(3, vec![Transaction::new("B", "C", 1_500)], "irrelevant".into(), 5003);
        state.apply(&block3);
        // A is untouched by block 3.
        assert_eq!(state.history("A"), vec![(1, 10_000), (2, -5_000)]);
    }

    #[test]
    fn unknown_account_history_is_empty() {
        let state = genesis_state();
        assert!(state.history("nobody").is_empty());
    }
}
