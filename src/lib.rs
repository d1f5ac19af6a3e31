pub mod activation;
pub mod errors;
pub mod loss;
pub mod network;
pub mod optim;
pub mod regularization;
pub mod train;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use errors::{NetworkError, Result};
pub use loss::error_function::ErrorFunction;
pub use network::{Gradients, InputFeature, Link, Network, NetworkSpec, Node, NodeRef};
pub use optim::sgd::Sgd;
pub use regularization::regularization::Regularization;
pub use train::{dataset_loss, train_loop, train_step, EpochStats, TrainConfig};
