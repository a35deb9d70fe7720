//! Best-effort HTTP gossip for **replichain**.
//!
//! Outbound side of §4.6: once a node commits a block (locally mined or
//! ingested from a peer that designated it the next proposer) it fans the
//! encoded block out to every other configured peer concurrently, over
//! plain HTTP `POST /inform/block`. Delivery is fire-and-forget: a failed
//! send is logged and otherwise ignored. No retry, no backpressure — the
//! peer will discover divergence on its next receipt and reject a
//! mismatched successor.

use std::time::Duration;

use replichain_core::Block;

/// Default per-request timeout for gossip sends. Keeps a single unreachable
/// peer from stalling the miner task indefinitely; not a retry mechanism.
const GOSSIP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
/// Fans committed blocks out to peers over HTTP.
pub struct GossipClient {
    http: reqwest::Client,
}

impl GossipClient {
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(GOSSIP_TIMEOUT)
            .build()
            .expect("reqwest client configuration is valid");
        Self { http }
    }

    /// POSTs `block` to `http://localhost:<peer>/inform/block` for every
    /// `peer` in `peers` other than `self_id`, concurrently. Errors are
    /// logged at `warn` and otherwise swallowed — gossip never surfaces a
    /// failure to the miner.
    pub async fn broadcast(&self, peers: &[u64], self_id: u64, block: &Block) {
        let sends = peers.iter().filter(|&&peer| peer != self_id).map(|&peer| self.send_to(peer, block));
        futures::future::join_all(sends).await;
    }

    async fn send_to(&self, peer: u64, block: &Block) {
        let url = format!("http://localhost:{peer}/inform/block");
        match self.http.post(&url).json(block).send().await {
            Ok(resp) if !resp.status().is_success() => {
                tracing::warn!(peer, status = %resp.status(), "peer rejected gossiped block");
            }
            Ok(_) => {
                tracing::debug!(peer, block.number, "gossiped block to peer");
            }
            Err(err) => {
                tracing::warn!(peer, block.number, error = %err, "gossip send failed");
            }
        }
    }
}

impl Default for GossipClient {
    fn default() -> Self {
        Self::new()
    }
}
