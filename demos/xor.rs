use playground_nn::{
    ActivationFunction, ErrorFunction, Network, Regularization, TrainConfig, dataset_loss, train_step,
};
use tracing_subscriber::EnvFilter;

fn main() -> playground_nn::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut network = Network::build(
        &[2, 3, 1],
        ActivationFunction::Tanh,
        ActivationFunction::Tanh,
        Regularization::None,
        &["x1", "x2"],
        false,
    )?;
    let mut grads = network.gradients();

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![0.0, 1.0, 1.0, 0.0];

    // Full-batch updates: one weight update per pass over the four examples.
    let config = TrainConfig::new(2000, inputs.len(), 0.1);

    for epoch in 0..config.epochs {
        train_step(&mut network, &mut grads, &inputs, &targets, &config)?;
        if (epoch + 1) % 500 == 0 {
            let loss = dataset_loss(&mut network, &inputs, &targets, ErrorFunction::Square)?;
            println!("Epoch {}: loss = {loss:.6}", epoch + 1);
        }
    }

    for input in &inputs {
        println!("Input: {:?} -> Output: {:.4}", input, network.forward(input)?);
    }
    Ok(())
}
