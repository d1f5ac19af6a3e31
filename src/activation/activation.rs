use serde::{Serialize, Deserialize};
use std::f64::consts::E;
use std::fmt;
use std::str::FromStr;

use crate::errors::NetworkError;

/// Element-wise activation applied to a node's total input.
///
/// Hidden layers share one variant and the output layer may use another;
/// each node carries its variant by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationFunction {
    Linear,
    Tanh,
    ReLU,
    Sigmoid,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Linear => x,
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
        }
    }

    /// Derivative with respect to the total input `x` (not the output).
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Linear => 1.0,
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
            ActivationFunction::ReLU => if x <= 0.0 { 0.0 } else { 1.0 },
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Linear => "linear",
            ActivationFunction::Tanh => "tanh",
            ActivationFunction::ReLU => "relu",
            ActivationFunction::Sigmoid => "sigmoid",
        }
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationFunction {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(ActivationFunction::Linear),
            "tanh" => Ok(ActivationFunction::Tanh),
            "relu" => Ok(ActivationFunction::ReLU),
            "sigmoid" => Ok(ActivationFunction::Sigmoid),
            _ => Err(NetworkError::UnknownActivation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relu_derivative_is_zero_at_origin() {
        assert_eq!(ActivationFunction::ReLU.function(-2.0), 0.0);
        assert_eq!(ActivationFunction::ReLU.derivative(0.0), 0.0);
        assert_eq!(ActivationFunction::ReLU.derivative(1e-9), 1.0);
    }

    #[test]
    fn sigmoid_midpoint() {
        assert!((ActivationFunction::Sigmoid.function(0.0) - 0.5).abs() < 1e-12);
        assert!((ActivationFunction::Sigmoid.derivative(0.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("TanH".parse::<ActivationFunction>().unwrap(), ActivationFunction::Tanh);
        assert_eq!("relu".parse::<ActivationFunction>().unwrap(), ActivationFunction::ReLU);
        assert!("softmax".parse::<ActivationFunction>().is_err());
    }

    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&ActivationFunction::ReLU).unwrap();
        assert_eq!(json, "\"relu\"");
        let back: ActivationFunction = serde_json::from_str("\"sigmoid\"").unwrap();
        assert_eq!(back, ActivationFunction::Sigmoid);
    }
}
