use serde::{Serialize, Deserialize};

/// Per-epoch training statistics returned by `train_loop`.
///
/// The loss-chart collaborator plots `train_loss` / `test_loss` over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean error over the training set after this epoch's updates.
    pub train_loss: f64,
    /// Mean error over the test set, if one was provided.
    pub test_loss: Option<f64>,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
