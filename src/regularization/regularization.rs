use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::NetworkError;

/// Weight penalty attached to every link of a network.
///
/// - `None` — no penalty term; the update is plain gradient descent.
/// - `L1`   — |w|, derivative sign(w). A weight update that crosses zero under
///            L1 pins the link at 0.0 and kills it (see `Network::update`).
/// - `L2`   — ½w², derivative w.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regularization {
    #[default]
    None,
    L1,
    L2,
}

impl Regularization {
    pub fn function(&self, w: f64) -> f64 {
        match self {
            Regularization::None => 0.0,
            Regularization::L1 => w.abs(),
            Regularization::L2 => 0.5 * w * w,
        }
    }

    pub fn derivative(&self, w: f64) -> f64 {
        match self {
            Regularization::None => 0.0,
            Regularization::L1 => {
                if w < 0.0 { -1.0 } else if w > 0.0 { 1.0 } else { 0.0 }
            }
            Regularization::L2 => w,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Regularization::None)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Regularization::None => "none",
            Regularization::L1 => "L1",
            Regularization::L2 => "L2",
        }
    }
}

impl fmt::Display for Regularization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Regularization {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Regularization::None),
            "l1" => Ok(Regularization::L1),
            "l2" => Ok(Regularization::L2),
            _ => Err(NetworkError::UnknownRegularization(s.to_string())),
        }
    }
}
