use rand::Rng;

use crate::network::gradients::Accumulator;
use crate::network::node::NodeRef;
use crate::regularization::regularization::Regularization;

/// Directed weighted edge from a node in layer L-1 to a node in layer L.
///
/// Links live in `Network::links`; both endpoints only hold the link's index.
#[derive(Debug, Clone)]
pub struct Link {
    /// "<source id>-<dest id>"
    pub id: String,
    pub source: NodeRef,
    pub dest: NodeRef,
    weight: f64,
    pub regularization: Regularization,
    /// ∂E/∂weight from the last backward pass.
    pub error_der: f64,
    is_dead: bool,
}

impl Link {
    pub fn new<R: Rng + ?Sized>(
        id: String,
        source: NodeRef,
        dest: NodeRef,
        regularization: Regularization,
        init_zero: bool,
        rng: &mut R,
    ) -> Link {
        let weight = if init_zero { 0.0 } else { rng.gen_range(-0.5..0.5) };
        Link {
            id,
            source,
            dest,
            weight,
            regularization,
            error_der: 0.0,
            is_dead: false,
        }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Overwrites the weight of a live link. A dead link keeps its 0.0.
    pub fn set_weight(&mut self, weight: f64) {
        if !self.is_dead {
            self.weight = weight;
        }
    }

    /// A dead link has weight 0.0 forever and takes no part in forward,
    /// backward, or update.
    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    /// Applies the averaged gradient plus the regularization term.
    /// Returns `true` if the link was pruned by this update.
    ///
    /// Callers must skip dead links and empty accumulators.
    pub(crate) fn apply_gradient(
        &mut self,
        acc: &Accumulator,
        learning_rate: f64,
        regularization_rate: f64,
    ) -> bool {
        let candidate = self.weight - (learning_rate / acc.count as f64) * acc.sum;

        if self.regularization.is_none() {
            self.weight = candidate;
            return false;
        }

        let reg_der = self.regularization.derivative(self.weight);
        let new_weight = candidate - learning_rate * regularization_rate * reg_der;

        if self.regularization == Regularization::L1 && self.weight * new_weight < 0.0 {
            self.weight = 0.0;
            self.is_dead = true;
            true
        } else {
            self.weight = new_weight;
            false
        }
    }
}
