use serde::{Serialize, Deserialize};

use crate::loss::square::SquareLoss;

/// Selects the error metric used by the backward pass and loss reporting.
///
/// - `Square` — ½(o−t)², derivative o−t. Pair with Tanh or Linear output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorFunction {
    #[default]
    Square,
}

impl ErrorFunction {
    pub fn error(&self, output: f64, target: f64) -> f64 {
        match self {
            ErrorFunction::Square => SquareLoss::loss(output, target),
        }
    }

    pub fn derivative(&self, output: f64, target: f64) -> f64 {
        match self {
            ErrorFunction::Square => SquareLoss::derivative(output, target),
        }
    }
}
