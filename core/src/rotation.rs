//! Round-robin proposer schedule.
//!
//! Pure functions over the configured node-identifier sequence `nodes`
//! (`N = [n_0, .., n_{k-1}]`). Block `b` (1-indexed) is proposed by
//! `N[(b-1) mod k]`; genesis (`b == 1`) is always proposed by `N[0]`.

/// Returns the expected proposer identifier for block `number`, or `None`
/// if `nodes` is empty.
pub fn expected_proposer(nodes: &[u64], number: u64) -> Option<u64> {
    if nodes.is_empty() {
        return None;
    }
    let index = (number.saturating_sub(1) as usize) % nodes.len();
    Some(nodes[index])
}

/// Returns the proposer for the block *after* the one mined by `miner`, or
/// `None` if `miner` is not present in `nodes` or `nodes` is empty.
pub fn next_proposer_after(nodes: &[u64], miner: u64) -> Option<u64> {
    if nodes.is_empty() {
        return None;
    }
    let index = nodes.iter().position(|&n| n == miner)?;
    Some(nodes[(index + 1) % nodes.len()])
}
