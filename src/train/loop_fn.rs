use std::time::Instant;

use tracing::info;

use crate::errors::Result;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::{dataset_loss, train_step};

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs and returns one `EpochStats`
/// per completed epoch.
///
/// # Arguments
/// - `network`       — mutable reference to the network; modified in place
/// - `train_inputs`  — training samples, each of length `network.input_size()`
/// - `train_targets` — corresponding targets, same length as `train_inputs`
/// - `test_inputs`   — optional held-out samples, evaluated after every epoch
/// - `test_targets`  — held-out targets (required iff `test_inputs` is `Some`)
/// - `config`        — hyperparameters
///
/// Every epoch is one `train_step`; the gradient accumulator lives for the
/// whole run so partial batches carry over between epochs.
///
/// # Panics
/// Panics if `train_inputs` is empty, lengths mismatch, `batch_size == 0`,
/// or only one of `test_inputs` / `test_targets` is given.
pub fn train_loop(
    network: &mut Network,
    train_inputs: &[Vec<f64>],
    train_targets: &[f64],
    test_inputs: Option<&[Vec<f64>]>,
    test_targets: Option<&[f64]>,
    config: &TrainConfig,
) -> Result<Vec<EpochStats>> {
    assert!(!train_inputs.is_empty(), "train_inputs must not be empty");
    assert_eq!(
        test_inputs.is_some(),
        test_targets.is_some(),
        "test_inputs and test_targets must be given together"
    );

    let mut grads = network.gradients();
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        train_step(network, &mut grads, train_inputs, train_targets, config)?;

        let train_loss = dataset_loss(network, train_inputs, train_targets, config.error)?;
        let test_loss = match (test_inputs, test_targets) {
            (Some(ti), Some(tt)) => Some(dataset_loss(network, ti, tt, config.error)?),
            _ => None,
        };

        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        info!(epoch, train_loss, test_loss = ?test_loss, "epoch complete");

        history.push(EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_loss,
            test_loss,
            elapsed_ms,
        });
    }

    Ok(history)
}
