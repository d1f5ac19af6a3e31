use serde::{Serialize, Deserialize};

use crate::network::{gradients::Gradients, network::Network};

/// Plain gradient descent with a regularization rate for the link penalty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sgd {
    pub learning_rate: f64,
    #[serde(default)]
    pub regularization_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate, regularization_rate: 0.0 }
    }

    pub fn with_regularization(learning_rate: f64, regularization_rate: f64) -> Sgd {
        Sgd { learning_rate, regularization_rate }
    }

    /// Applies the accumulated gradients to `network` and resets `grads`.
    pub fn step(&self, network: &mut Network, grads: &mut Gradients) {
        network.update(grads, self.learning_rate, self.regularization_rate);
    }
}
