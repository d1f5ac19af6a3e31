use serde::{Serialize, Deserialize};

use crate::loss::error_function::ErrorFunction;
use crate::optim::sgd::Sgd;

/// Hyperparameters for `train_step` / `train_loop`.
///
/// # Fields
/// - `epochs`              — full passes over the training data (`train_loop` only)
/// - `batch_size`          — examples accumulated between weight updates; `1` for online SGD
/// - `learning_rate`       — gradient-descent step size
/// - `regularization_rate` — weight of the link penalty term
/// - `error`               — error metric driving the backward pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub batch_size: usize,
    pub learning_rate: f64,
    pub regularization_rate: f64,
    pub error: ErrorFunction,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 100,
            batch_size: 10,
            learning_rate: 0.03,
            regularization_rate: 0.0,
            error: ErrorFunction::Square,
        }
    }
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no regularization and square error.
    pub fn new(epochs: usize, batch_size: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            batch_size,
            learning_rate,
            ..TrainConfig::default()
        }
    }

    pub fn optimizer(&self) -> Sgd {
        Sgd::with_regularization(self.learning_rate, self.regularization_rate)
    }
}
