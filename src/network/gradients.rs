use crate::network::node::NodeRef;

/// Running sum and count of per-example gradient contributions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulator {
    pub sum: f64,
    pub count: usize,
}

impl Accumulator {
    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Mean of the accumulated contributions, or `None` when nothing was added.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn reset(&mut self) {
        *self = Accumulator::default();
    }
}

/// Gradient sums collected by `Network::backward` and consumed by
/// `Network::update`.
///
/// Tied to the network that created it via `Network::gradients()`: one
/// accumulator per node (indexed by layer, then position) and one per link
/// (indexed like `Network::links`). Any other network rejects it, even one of
/// the same shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub(crate) network_id: u64,
    pub(crate) nodes: Vec<Vec<Accumulator>>,
    pub(crate) links: Vec<Accumulator>,
}

impl Gradients {
    pub(crate) fn new(network_id: u64, layer_sizes: &[usize], link_count: usize) -> Gradients {
        Gradients {
            network_id,
            nodes: layer_sizes.iter().map(|&n| vec![Accumulator::default(); n]).collect(),
            links: vec![Accumulator::default(); link_count],
        }
    }

    pub fn node(&self, node: NodeRef) -> &Accumulator {
        &self.nodes[node.layer][node.index]
    }

    pub fn link(&self, index: usize) -> &Accumulator {
        &self.links[index]
    }

    /// `true` when no backward pass has been accumulated since the last update.
    pub fn is_empty(&self) -> bool {
        self.nodes.iter().flatten().all(Accumulator::is_empty)
            && self.links.iter().all(Accumulator::is_empty)
    }

    /// Drops every accumulated contribution without applying it.
    pub fn clear(&mut self) {
        self.nodes.iter_mut().flatten().for_each(Accumulator::reset);
        self.links.iter_mut().for_each(Accumulator::reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_accumulator_is_none() {
        let mut acc = Accumulator::default();
        assert_eq!(acc.mean(), None);
        acc.add(1.0);
        acc.add(3.0);
        assert_eq!(acc.mean(), Some(2.0));
        acc.reset();
        assert!(acc.is_empty());
    }

    #[test]
    fn clear_resets_all_slots() {
        let mut grads = Gradients::new(0, &[2, 1], 2);
        grads.nodes[1][0].add(0.5);
        grads.links[1].add(-0.25);
        assert!(!grads.is_empty());
        grads.clear();
        assert!(grads.is_empty());
        assert_eq!(grads.nodes.len(), 2);
        assert_eq!(grads.links.len(), 2);
    }
}
