//! Block validation state machine.
//!
//! [`is_new_block_valid`] is the pure, contextual check a node runs against
//! every proposed block — its own freshly mined one and every peer block
//! received over gossip. It requires `expected_prev`/`expected_number`,
//! typically the current chain tip, to confirm proper linkage, the same way
//! the teacher crate's `Block::is_valid` needed the chain tip hash.

use crate::error::ValidationError;
use crate::rotation;
use crate::state::State;
use crate::types::{Block, GENESIS_PREV_HASH};

/// Checks `block` against the current chain tip (`tip`, `None` if the chain
/// is empty), `state`, and `nodes` (the rotation schedule), short-circuiting
/// on the first failing check:
///
/// 1. Integrity — the recomputed hash must equal both `block.hash` and
///    `claimed_hash`.
/// 2. Lineage — `previous_hash`/`number` must match genesis or the tip.
/// 3. Applicability — `State::validate` must return every transaction in
///    `block.transactions`, none skipped.
/// 4. Proposer schedule — `block.miner` must equal the expected proposer.
pub fn is_new_block_valid(
    block: &Block,
    claimed_hash: &str,
    tip: Option<&Block>,
    state: &State,
    nodes: &[u64],
) -> Result<(), ValidationError> {
    let recomputed = block.recompute_hash();
    if recomputed != block.hash || recomputed != claimed_hash {
        return Err(ValidationError::HashMismatch);
    }

    match tip {
        None => {
            if block.previous_hash != GENESIS_PREV_HASH || block.number != 1 {
                return Err(ValidationError::PrevHashMismatch);
            }
        }
        Some(tip) => {
            if block.previous_hash != tip.hash {
                return Err(ValidationError::PrevHashMismatch);
            }
            if block.number != tip.number + 1 {
                return Err(ValidationError::NonSequentialNumber);
            }
        }
    }

    let valid_txns = state.validate(&block.transactions);
    if valid_txns.len() != block.transactions.len() {
        return Err(ValidationError::TransactionRejected);
    }

    let expected_miner = rotation::expected_proposer(nodes, block.number);
    if expected_miner != Some(block.miner) {
        return Err(ValidationError::ProposerMismatch);
    }

    Ok(())
}
