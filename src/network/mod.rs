pub mod gradients;
pub mod input_feature;
pub mod link;
pub mod network;
pub mod node;
pub mod spec;

pub use gradients::{Accumulator, Gradients};
pub use input_feature::InputFeature;
pub use link::Link;
pub use network::Network;
pub use node::{Node, NodeRef};
pub use spec::NetworkSpec;
