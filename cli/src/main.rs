//! Node binary entry point.
//!
//! Parses CLI arguments into a [`NodeConfig`], starts the `axum` HTTP
//! server, and runs the background miner loop: a task that waits on a
//! [`MineTrigger`], drives [`mine_and_commit`] on a blocking thread, then
//! gossips the result to every configured peer.

use std::sync::{Arc, Mutex};

use clap::Parser;
use replichain_core::miner::{mine_and_commit, MineTrigger};
use replichain_core::{Engine, NodeConfig};
use replichain_network::GossipClient;
use replichain_rpc::{router, AppState};
use tokio::sync::mpsc;

/// Command-line arguments for a single replichain node.
///
/// The node identifier is the port it listens on; `--nodes` carries the
/// full membership including self, and `is_bootstrap_node` is derived from
/// it rather than passed separately.
#[derive(Parser, Debug)]
#[command(name = "replichain-node", about = "Run a replichain cluster node")]
struct Args {
    /// Port this node listens on, and its identifier in the rotation.
    #[arg(long)]
    port: u64,

    /// Seconds the miner waits before proposing each block.
    #[arg(long, default_value_t = 5)]
    blocktime: u64,

    /// Full peer membership (ports), including this node.
    #[arg(long, num_args = 1.., required = true)]
    nodes: Vec<u64>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    let args = Args::parse();
    let config = NodeConfig::builder().node_id(args.port).nodes(args.nodes.clone()).block_mine_time(args.blocktime).finish();

    let engine = Arc::new(Mutex::new(Engine::new(config)));
    let (miner_trigger, miner_rx) = mpsc::unbounded_channel();

    tokio::spawn(run_miner_loop(engine.clone(), miner_rx, args.nodes.clone(), args.port));

    let app = AppState { engine, miner_trigger };
    let router = router(app);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port as u16))
        .await
        .unwrap_or_else(|err| panic!("failed to bind port {}: {err}", args.port));
    tracing::info!(port = args.port, nodes = ?args.nodes, "replichain node listening");
    axum::serve(listener, router).await.expect("HTTP server exited unexpectedly");
}

/// Waits for mine triggers, mines on a blocking thread so the async
/// runtime is never stalled by the miner's interval sleep, then gossips to
/// every configured peer other than this node itself.
async fn run_miner_loop(
    engine: Arc<Mutex<Engine>>,
    mut triggers: mpsc::UnboundedReceiver<MineTrigger>,
    nodes: Vec<u64>,
    self_id: u64,
) {
    let gossip = GossipClient::new();
    while let Some(trigger) = triggers.recv().await {
        let task_engine = engine.clone();
        let block = tokio::task::spawn_blocking(move || mine_and_commit(&task_engine, trigger))
            .await
            .expect("miner thread panicked");
        gossip.broadcast(&nodes, self_id, &block).await;
    }
}
