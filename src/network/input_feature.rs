use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::NetworkError;

/// Feature computed from a 2D point `(x, y)` and fed to one input node.
///
/// The serialized name doubles as the input node's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputFeature {
    X,
    Y,
    XSquared,
    YSquared,
    XTimesY,
    SinX,
}

impl InputFeature {
    pub const ALL: [InputFeature; 6] = [
        InputFeature::X,
        InputFeature::Y,
        InputFeature::XSquared,
        InputFeature::YSquared,
        InputFeature::XTimesY,
        InputFeature::SinX,
    ];

    pub fn apply(&self, x: f64, y: f64) -> f64 {
        match self {
            InputFeature::X => x,
            InputFeature::Y => y,
            InputFeature::XSquared => x * x,
            InputFeature::YSquared => y * y,
            InputFeature::XTimesY => x * y,
            InputFeature::SinX => x.sin(),
        }
    }

    /// Node id used for this feature's input node.
    pub fn id(&self) -> &'static str {
        match self {
            InputFeature::X => "x",
            InputFeature::Y => "y",
            InputFeature::XSquared => "xSquared",
            InputFeature::YSquared => "ySquared",
            InputFeature::XTimesY => "xTimesY",
            InputFeature::SinX => "sinX",
        }
    }

    /// Display label, e.g. "X_1^2".
    pub fn label(&self) -> &'static str {
        match self {
            InputFeature::X => "X_1",
            InputFeature::Y => "X_2",
            InputFeature::XSquared => "X_1^2",
            InputFeature::YSquared => "X_2^2",
            InputFeature::XTimesY => "X_1X_2",
            InputFeature::SinX => "sin(X_1)",
        }
    }
}

impl fmt::Display for InputFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for InputFeature {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputFeature::ALL
            .iter()
            .copied()
            .find(|feature| feature.id() == s)
            .ok_or_else(|| NetworkError::UnknownInputFeature(s.to_string()))
    }
}
