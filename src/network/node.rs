use crate::activation::activation::ActivationFunction;
use crate::network::link::Link;

/// Bias used for freshly built nodes unless the network is zero-initialized.
pub const DEFAULT_BIAS: f64 = 0.1;

/// Position of a node inside the network: layer index, then position in layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub layer: usize,
    pub index: usize,
}

impl NodeRef {
    pub fn new(layer: usize, index: usize) -> NodeRef {
        NodeRef { layer, index }
    }
}

/// A single unit of the graph. Owned by its layer; links are referenced by
/// their index in `Network::links`.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub bias: f64,
    pub activation: ActivationFunction,
    /// bias + Σ weight·source.output over live incoming links (last forward pass).
    pub total_input: f64,
    pub output: f64,
    /// ∂E/∂output from the last backward pass.
    pub output_der: f64,
    /// ∂E/∂total_input from the last backward pass.
    pub input_der: f64,
    pub(crate) input_links: Vec<usize>,
    pub(crate) output_links: Vec<usize>,
}

impl Node {
    pub fn new(id: String, activation: ActivationFunction, init_zero: bool) -> Node {
        Node {
            id,
            bias: if init_zero { 0.0 } else { DEFAULT_BIAS },
            activation,
            total_input: 0.0,
            output: 0.0,
            output_der: 0.0,
            input_der: 0.0,
            input_links: Vec::new(),
            output_links: Vec::new(),
        }
    }

    /// Indices into `Network::links` of the links feeding this node.
    pub fn input_links(&self) -> &[usize] {
        &self.input_links
    }

    /// Indices into `Network::links` of the links leaving this node.
    pub fn output_links(&self) -> &[usize] {
        &self.output_links
    }

    /// Recomputes `total_input` and `output` from the previous layer's outputs.
    /// Dead links are skipped.
    pub(crate) fn update_output(&mut self, prev_layer: &[Node], links: &[Link]) -> f64 {
        let mut total = self.bias;
        for &li in &self.input_links {
            let link = &links[li];
            if link.is_dead() {
                continue;
            }
            total += link.weight() * prev_layer[link.source.index].output;
        }
        self.total_input = total;
        self.output = self.activation.function(total);
        self.output
    }
}
