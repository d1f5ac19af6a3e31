use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::errors::{NetworkError, Result};
use crate::network::input_feature::InputFeature;
use crate::network::network::Network;
use crate::regularization::regularization::Regularization;

/// A serializable description of a network: everything `Network::build`
/// needs, with the input layer derived from `inputs` and a single output.
///
/// Only the architecture is stored; trained weights are never persisted.
/// Changing any field means building a fresh network from the spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Features fed to the network, one input node each, in node order.
    pub inputs: Vec<InputFeature>,
    /// Sizes of the hidden layers, input side first. May be empty.
    #[serde(default)]
    pub hidden_layers: Vec<usize>,
    #[serde(default = "default_activation")]
    pub activation: ActivationFunction,
    #[serde(default = "default_activation")]
    pub output_activation: ActivationFunction,
    #[serde(default)]
    pub regularization: Regularization,
    /// Start from all-zero weights and biases instead of random ones.
    #[serde(default)]
    pub init_zero: bool,
}

fn default_activation() -> ActivationFunction {
    ActivationFunction::Tanh
}

impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec {
            inputs: vec![InputFeature::X, InputFeature::Y],
            hidden_layers: vec![4, 2],
            activation: ActivationFunction::Tanh,
            output_activation: ActivationFunction::Tanh,
            regularization: Regularization::None,
            init_zero: false,
        }
    }
}

impl NetworkSpec {
    /// Full layer-size sequence: inputs, hidden layers, then the single output.
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = Vec::with_capacity(self.hidden_layers.len() + 2);
        shape.push(self.inputs.len());
        shape.extend_from_slice(&self.hidden_layers);
        shape.push(1);
        shape
    }

    /// Input node ids, one per feature.
    pub fn input_ids(&self) -> Vec<&'static str> {
        self.inputs.iter().map(InputFeature::id).collect()
    }

    /// Input vector for the 2D point `(x, y)`, in input node order.
    pub fn input_for(&self, x: f64, y: f64) -> Vec<f64> {
        self.inputs.iter().map(|feature| feature.apply(x, y)).collect()
    }

    pub fn build(&self) -> Result<Network> {
        self.build_with_rng(&mut rand::thread_rng())
    }

    /// Fails with a config error if a feature is listed twice.
    pub fn build_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network> {
        for (i, feature) in self.inputs.iter().enumerate() {
            if self.inputs[..i].contains(feature) {
                return Err(NetworkError::config(format!("input feature {feature} is listed twice")));
            }
        }
        Network::build_with_rng(
            &self.shape(),
            self.activation,
            self.output_activation,
            self.regularization,
            self.input_ids().as_slice(),
            self.init_zero,
            rng,
        )
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
