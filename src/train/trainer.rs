use crate::errors::Result;
use crate::loss::error_function::ErrorFunction;
use crate::network::{gradients::Gradients, network::Network};
use crate::train::train_config::TrainConfig;

/// One pass over the dataset in order: forward and backward for every
/// example, with a weight update after every `config.batch_size` examples.
///
/// Gradients of a trailing partial batch stay in `grads` and are applied by
/// the next update, so the accumulator must be kept across calls.
///
/// # Panics
/// Panics if `inputs` and `targets` differ in length or `batch_size == 0`.
pub fn train_step(
    network: &mut Network,
    grads: &mut Gradients,
    inputs: &[Vec<f64>],
    targets: &[f64],
    config: &TrainConfig,
) -> Result<()> {
    assert_eq!(
        inputs.len(),
        targets.len(),
        "inputs and targets must have equal length"
    );
    assert!(config.batch_size > 0, "batch_size must be at least 1");

    let optimizer = config.optimizer();

    for (i, (input, &target)) in inputs.iter().zip(targets).enumerate() {
        network.forward(input)?;
        network.backward(target, config.error, grads);
        if (i + 1) % config.batch_size == 0 {
            optimizer.step(network, grads);
        }
    }
    Ok(())
}

/// Mean error of the network over a dataset (no gradient accumulation).
/// Returns 0.0 for an empty dataset.
///
/// # Panics
/// Panics if `inputs` and `targets` differ in length.
pub fn dataset_loss(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[f64],
    error: ErrorFunction,
) -> Result<f64> {
    assert_eq!(
        inputs.len(),
        targets.len(),
        "inputs and targets must have equal length"
    );
    if inputs.is_empty() {
        return Ok(0.0);
    }
    let mut total = 0.0;
    for (input, &target) in inputs.iter().zip(targets) {
        let output = network.forward(input)?;
        total += error.error(output, target);
    }
    Ok(total / inputs.len() as f64)
}
