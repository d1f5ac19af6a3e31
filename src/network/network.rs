use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;
use tracing::debug;

use crate::activation::activation::ActivationFunction;
use crate::errors::{NetworkError, Result};
use crate::loss::error_function::ErrorFunction;
use crate::network::gradients::Gradients;
use crate::network::link::Link;
use crate::network::node::{Node, NodeRef};
use crate::regularization::regularization::Regularization;

/// Densely connected layered graph with a single output node.
///
/// Nodes are stored per layer and links in one flat arena; everything is
/// addressed by index, so dropping the `Network` releases the whole graph at
/// once. Rebuilding means building a new `Network` and replacing the old one.
#[derive(Debug)]
pub struct Network {
    /// Process-unique; ties `Gradients` to the network that created them.
    id: u64,
    layers: Vec<Vec<Node>>,
    links: Vec<Link>,
}

static NEXT_NETWORK_ID: AtomicU64 = AtomicU64::new(1);

fn next_network_id() -> u64 {
    NEXT_NETWORK_ID.fetch_add(1, Ordering::Relaxed)
}

/// A clone is a separate network and gets its own id.
impl Clone for Network {
    fn clone(&self) -> Self {
        Network {
            id: next_network_id(),
            layers: self.layers.clone(),
            links: self.links.clone(),
        }
    }
}

impl Network {
    /// Builds a network with weights drawn from the thread-local RNG.
    ///
    /// `shape[0]` must equal `input_ids.len()` and the last entry must be 1.
    pub fn build<S: AsRef<str>>(
        shape: &[usize],
        activation: ActivationFunction,
        output_activation: ActivationFunction,
        regularization: Regularization,
        input_ids: &[S],
        init_zero: bool,
    ) -> Result<Network> {
        Network::build_with_rng(
            shape,
            activation,
            output_activation,
            regularization,
            input_ids,
            init_zero,
            &mut rand::thread_rng(),
        )
    }

    /// Same as `build`, drawing initial weights from `rng`.
    pub fn build_with_rng<S: AsRef<str>, R: Rng + ?Sized>(
        shape: &[usize],
        activation: ActivationFunction,
        output_activation: ActivationFunction,
        regularization: Regularization,
        input_ids: &[S],
        init_zero: bool,
        rng: &mut R,
    ) -> Result<Network> {
        validate_shape(shape, input_ids.len())?;

        let num_layers = shape.len();
        let mut layers: Vec<Vec<Node>> = Vec::with_capacity(num_layers);
        let mut links: Vec<Link> = Vec::new();
        let mut id_counter = 1usize;

        for (layer_idx, &num_nodes) in shape.iter().enumerate() {
            let is_input_layer = layer_idx == 0;
            let layer_activation = if layer_idx == num_layers - 1 {
                output_activation
            } else {
                activation
            };

            let mut layer: Vec<Node> = Vec::with_capacity(num_nodes);
            for i in 0..num_nodes {
                let id = if is_input_layer {
                    input_ids[i].as_ref().to_string()
                } else {
                    let id = id_counter.to_string();
                    id_counter += 1;
                    id
                };
                let mut node = Node::new(id, layer_activation, init_zero);

                if !is_input_layer {
                    let dest = NodeRef::new(layer_idx, i);
                    for (j, prev) in layers[layer_idx - 1].iter_mut().enumerate() {
                        let link_idx = links.len();
                        links.push(Link::new(
                            format!("{}-{}", prev.id, node.id),
                            NodeRef::new(layer_idx - 1, j),
                            dest,
                            regularization,
                            init_zero,
                            rng,
                        ));
                        prev.output_links.push(link_idx);
                        node.input_links.push(link_idx);
                    }
                }
                layer.push(node);
            }
            layers.push(layer);
        }

        debug!(
            shape = ?shape,
            links = links.len(),
            activation = %activation,
            output_activation = %output_activation,
            regularization = %regularization,
            init_zero,
            "built network"
        );

        Ok(Network { id: next_network_id(), layers, links })
    }

    /// Empty gradient accumulator shaped for this network.
    pub fn gradients(&self) -> Gradients {
        Gradients::new(self.id, &self.layer_sizes(), self.links.len())
    }

    /// Forward pass; stores total input and output on every node and returns
    /// the output node's value.
    pub fn forward(&mut self, inputs: &[f64]) -> Result<f64> {
        let input_layer = &mut self.layers[0];
        if inputs.len() != input_layer.len() {
            return Err(NetworkError::ShapeMismatch {
                expected: input_layer.len(),
                actual: inputs.len(),
            });
        }
        for (node, &value) in input_layer.iter_mut().zip(inputs) {
            node.output = value;
        }

        for layer_idx in 1..self.layers.len() {
            let (done, rest) = self.layers.split_at_mut(layer_idx);
            let prev = &done[layer_idx - 1];
            for node in rest[0].iter_mut() {
                node.update_output(prev, &self.links);
            }
        }

        Ok(self.output_node().output)
    }

    /// Backward pass for the example seen by the latest `forward` call.
    /// Per-node and per-link gradients are added into `grads`.
    ///
    /// # Panics
    /// Panics if `grads` was not created by this network.
    pub fn backward(&mut self, target: f64, error: ErrorFunction, grads: &mut Gradients) {
        self.check_gradients(grads);

        let last = self.layers.len() - 1;
        let out = &mut self.layers[last][0];
        out.output_der = error.derivative(out.output, target);

        for layer_idx in (1..=last).rev() {
            for (i, node) in self.layers[layer_idx].iter_mut().enumerate() {
                node.input_der = node.output_der * node.activation.derivative(node.total_input);
                grads.nodes[layer_idx][i].add(node.input_der);
            }

            let (done, rest) = self.layers.split_at_mut(layer_idx);
            let prev = &mut done[layer_idx - 1];
            let current = &rest[0];

            for node in current {
                for &li in &node.input_links {
                    let link = &mut self.links[li];
                    if link.is_dead() {
                        continue;
                    }
                    link.error_der = node.input_der * prev[link.source.index].output;
                    grads.links[li].add(link.error_der);
                }
            }

            if layer_idx == 1 {
                continue;
            }

            for node in prev.iter_mut() {
                node.output_der = node
                    .output_links
                    .iter()
                    .map(|&li| &self.links[li])
                    .filter(|link| !link.is_dead())
                    .map(|link| link.weight() * current[link.dest.index].input_der)
                    .sum();
            }
        }
    }

    /// Gradient-descent step from the accumulated gradients, then resets them.
    ///
    /// Biases move by the mean node gradient. Live links move by the mean link
    /// gradient plus the regularization term; an L1 step that crosses zero
    /// pins the weight at 0.0 and kills the link for good.
    pub fn update(&mut self, grads: &mut Gradients, learning_rate: f64, regularization_rate: f64) {
        self.check_gradients(grads);

        for (layer, accs) in self.layers.iter_mut().zip(grads.nodes.iter_mut()).skip(1) {
            for (node, acc) in layer.iter_mut().zip(accs.iter_mut()) {
                if let Some(mean) = acc.mean() {
                    node.bias -= learning_rate * mean;
                    acc.reset();
                }
            }
        }

        for (link, acc) in self.links.iter_mut().zip(grads.links.iter_mut()) {
            if link.is_dead() || acc.is_empty() {
                continue;
            }
            if link.apply_gradient(acc, learning_rate, regularization_rate) {
                debug!(link = %link.id, "link pruned by L1 regularization");
            }
            acc.reset();
        }
    }

    fn check_gradients(&self, grads: &Gradients) {
        assert!(
            grads.network_id == self.id,
            "gradient accumulator does not match this network"
        );
    }

    /// Visits every node in layer order. The input layer is skipped unless
    /// `include_inputs` is set.
    pub fn for_each_node<F: FnMut(&Node)>(&self, include_inputs: bool, mut visitor: F) {
        let skip = if include_inputs { 0 } else { 1 };
        self.layers.iter().skip(skip).flatten().for_each(|node| visitor(node));
    }

    /// Mutable variant of `for_each_node`.
    pub fn for_each_node_mut<F: FnMut(&mut Node)>(&mut self, include_inputs: bool, mut visitor: F) {
        let skip = if include_inputs { 0 } else { 1 };
        self.layers.iter_mut().skip(skip).flatten().for_each(|node| visitor(node));
    }

    pub fn output_node(&self) -> &Node {
        &self.layers[self.layers.len() - 1][0]
    }

    pub fn output_node_mut(&mut self) -> &mut Node {
        let last = self.layers.len() - 1;
        &mut self.layers[last][0]
    }

    pub fn layers(&self) -> &[Vec<Node>] {
        &self.layers
    }

    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Vec::len).collect()
    }

    pub fn input_size(&self) -> usize {
        self.layers[0].len()
    }

    pub fn node(&self, node: NodeRef) -> &Node {
        &self.layers[node.layer][node.index]
    }

    pub fn node_mut(&mut self, node: NodeRef) -> &mut Node {
        &mut self.layers[node.layer][node.index]
    }

    /// Looks a node up by id.
    pub fn find_node(&self, id: &str) -> Option<NodeRef> {
        self.layers.iter().enumerate().find_map(|(layer, nodes)| {
            nodes.iter().position(|n| n.id == id).map(|index| NodeRef::new(layer, index))
        })
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn link(&self, index: usize) -> &Link {
        &self.links[index]
    }

    pub fn link_mut(&mut self, index: usize) -> &mut Link {
        &mut self.links[index]
    }

    /// Links feeding `node`, in source order.
    pub fn input_links<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Link> + 'a {
        node.input_links.iter().map(move |&li| &self.links[li])
    }

    /// Links leaving `node`, in destination order.
    pub fn output_links<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Link> + 'a {
        node.output_links.iter().map(move |&li| &self.links[li])
    }

    pub fn live_link_count(&self) -> usize {
        self.links.iter().filter(|l| !l.is_dead()).count()
    }
}

fn validate_shape(shape: &[usize], num_input_ids: usize) -> Result<()> {
    if shape.len() < 2 {
        return Err(NetworkError::config(format!(
            "a network needs at least 2 layers, got {}",
            shape.len()
        )));
    }
    if num_input_ids != shape[0] {
        return Err(NetworkError::config(format!(
            "{} input ids given for an input layer of {} nodes",
            num_input_ids, shape[0]
        )));
    }
    if let Some(pos) = shape.iter().position(|&n| n == 0) {
        return Err(NetworkError::config(format!("layer {pos} has no nodes")));
    }
    if shape[shape.len() - 1] != 1 {
        return Err(NetworkError::config(format!(
            "the output layer must have exactly 1 node, got {}",
            shape[shape.len() - 1]
        )));
    }
    Ok(())
}
