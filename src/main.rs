// Minimal driver: all network logic lives in the library (src/lib.rs and its modules).
// Run the XOR demo with:
//   cargo run --example xor
// Logging is controlled with RUST_LOG (default `info`).
use playground_nn::{train_loop, NetworkSpec, TrainConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> playground_nn::Result<()> {
    // An optional path to a NetworkSpec JSON file overrides the default 2-4-2-1 network.
    let spec = match std::env::args().nth(1) {
        Some(path) => NetworkSpec::load_json(&path)?,
        None => NetworkSpec::default(),
    };
    info!(shape = ?spec.shape(), activation = %spec.activation, "playground-nn");

    let mut network = spec.build()?;
    let inputs = vec![vec![-1.0, -1.0], vec![-1.0, 1.0], vec![1.0, -1.0], vec![1.0, 1.0]];
    let targets = vec![1.0, -1.0, -1.0, 1.0];

    let config = TrainConfig::new(200, 4, 0.1);
    let history = train_loop(&mut network, &inputs, &targets, None, None, &config)?;
    if let Some(last) = history.last() {
        info!(epochs = last.epoch, loss = last.train_loss, "training finished");
    }
    Ok(())
}
