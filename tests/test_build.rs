// Graph construction: layer layout, dense connectivity, ids, initialization, and config errors.

use playground_nn::{
    ActivationFunction, InputFeature, Network, NetworkError, NetworkSpec, NodeRef, Regularization,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn build_231(init_zero: bool) -> Network {
    Network::build(
        &[2, 3, 1],
        ActivationFunction::Tanh,
        ActivationFunction::Tanh,
        Regularization::L2,
        &["x1", "x2"],
        init_zero,
    )
    .unwrap()
}

#[test]
fn test_layer_sizes_and_dense_links() {
    let network = build_231(false);

    assert_eq!(network.layer_sizes(), vec![2, 3, 1]);
    assert_eq!(network.links().len(), 2 * 3 + 3 * 1);

    for hidden in &network.layers()[1] {
        assert_eq!(hidden.input_links().len(), 2);
        assert_eq!(hidden.output_links().len(), 1);
    }
    assert_eq!(network.output_node().input_links().len(), 3);
    assert!(network.output_node().output_links().is_empty());
    for input in &network.layers()[0] {
        assert!(input.input_links().is_empty());
        assert_eq!(input.output_links().len(), 3);
    }
}

#[test]
fn test_every_hidden_node_sees_every_previous_node_once() {
    let network = build_231(false);
    for (layer_idx, layer) in network.layers().iter().enumerate().skip(1) {
        for node in layer {
            let mut sources: Vec<usize> = network
                .input_links(node)
                .map(|link| {
                    assert_eq!(link.source.layer, layer_idx - 1);
                    link.source.index
                })
                .collect();
            sources.sort_unstable();
            let expected: Vec<usize> = (0..network.layers()[layer_idx - 1].len()).collect();
            assert_eq!(sources, expected);
        }
    }
}

#[test]
fn test_node_and_link_ids() {
    let network = build_231(false);
    let ids: Vec<String> = {
        let mut ids = Vec::new();
        network.for_each_node(true, |node| ids.push(node.id.clone()));
        ids
    };
    assert_eq!(ids, vec!["x1", "x2", "1", "2", "3", "4"]);
    assert_eq!(network.output_node().id, "4");

    let first_hidden = &network.layers()[1][0];
    let link_ids: Vec<&str> = network.input_links(first_hidden).map(|l| l.id.as_str()).collect();
    assert_eq!(link_ids, vec!["x1-1", "x2-1"]);

    let out_ids: Vec<&str> = network
        .output_links(&network.layers()[1][2])
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(out_ids, vec!["3-4"]);

    assert_eq!(network.find_node("2"), Some(NodeRef::new(1, 1)));
    assert_eq!(network.find_node("nope"), None);
}

#[test]
fn test_random_initialization_ranges() {
    let network = build_231(false);
    for link in network.links() {
        assert!(link.weight() >= -0.5 && link.weight() < 0.5, "weight {} out of range", link.weight());
        assert!(!link.is_dead());
        assert_eq!(link.regularization, Regularization::L2);
    }
    network.for_each_node(false, |node| assert_eq!(node.bias, 0.1));
}

#[test]
fn test_zero_initialization() {
    let network = build_231(true);
    assert!(network.links().iter().all(|l| l.weight() == 0.0));
    network.for_each_node(false, |node| assert_eq!(node.bias, 0.0));
}

#[test]
fn test_output_activation_only_on_last_layer() {
    let network = Network::build(
        &[2, 2, 2, 1],
        ActivationFunction::ReLU,
        ActivationFunction::Linear,
        Regularization::None,
        &["a", "b"],
        false,
    )
    .unwrap();
    for layer in &network.layers()[1..3] {
        assert!(layer.iter().all(|n| n.activation == ActivationFunction::ReLU));
    }
    assert_eq!(network.output_node().activation, ActivationFunction::Linear);
}

#[test]
fn test_seeded_builds_are_reproducible() {
    let spec = NetworkSpec::default();
    let a = spec.build_with_rng(&mut StdRng::seed_from_u64(7)).unwrap();
    let b = spec.build_with_rng(&mut StdRng::seed_from_u64(7)).unwrap();
    let wa: Vec<f64> = a.links().iter().map(|l| l.weight()).collect();
    let wb: Vec<f64> = b.links().iter().map(|l| l.weight()).collect();
    assert_eq!(wa, wb);
}

#[test]
fn test_input_id_count_mismatch_is_config_error() {
    let result = Network::build(
        &[3, 2, 1],
        ActivationFunction::Tanh,
        ActivationFunction::Tanh,
        Regularization::None,
        &["x", "y"],
        false,
    );
    assert!(matches!(result, Err(NetworkError::Config { .. })));
}

#[test]
fn test_too_few_layers_is_config_error() {
    let result = Network::build(
        &[1],
        ActivationFunction::Tanh,
        ActivationFunction::Tanh,
        Regularization::None,
        &["x"],
        false,
    );
    assert!(matches!(result, Err(NetworkError::Config { .. })));
}

#[test]
fn test_multi_output_and_empty_layers_are_rejected() {
    let ids = ["x", "y"];
    for shape in [&[2usize, 3, 2][..], &[2, 0, 1][..]] {
        let result = Network::build(
            shape,
            ActivationFunction::Tanh,
            ActivationFunction::Tanh,
            Regularization::None,
            &ids,
            false,
        );
        assert!(matches!(result, Err(NetworkError::Config { .. })), "shape {shape:?}");
    }
}

#[test]
fn test_spec_shape_and_build() {
    let spec = NetworkSpec {
        inputs: vec![InputFeature::X, InputFeature::Y, InputFeature::XTimesY],
        hidden_layers: vec![4, 2],
        regularization: Regularization::L1,
        ..NetworkSpec::default()
    };
    assert_eq!(spec.shape(), vec![3, 4, 2, 1]);

    let network = spec.build().unwrap();
    assert_eq!(network.layer_sizes(), vec![3, 4, 2, 1]);
    assert!(network.links().iter().all(|l| l.regularization == Regularization::L1));
    let ids: Vec<&str> = network.layers()[0].iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["x", "y", "xTimesY"]);

    let no_hidden = NetworkSpec { hidden_layers: vec![], ..NetworkSpec::default() };
    assert_eq!(no_hidden.shape(), vec![2, 1]);
}

#[test]
fn test_spec_json_file_round_trip() {
    let spec = NetworkSpec {
        activation: ActivationFunction::ReLU,
        output_activation: ActivationFunction::Linear,
        regularization: Regularization::L2,
        init_zero: true,
        ..NetworkSpec::default()
    };
    let path = std::env::temp_dir().join(format!("playground-nn-spec-{}.json", std::process::id()));
    let path = path.to_str().unwrap();

    spec.save_json(path).unwrap();
    let loaded = NetworkSpec::load_json(path).unwrap();
    let _ = std::fs::remove_file(path);

    assert_eq!(loaded, spec);
}

#[test]
fn test_spec_json_defaults_and_names() {
    let spec: NetworkSpec =
        serde_json::from_str(r#"{ "inputs": ["x", "sinX"], "regularization": "l1" }"#).unwrap();
    assert_eq!(spec.inputs, vec![InputFeature::X, InputFeature::SinX]);
    assert!(spec.hidden_layers.is_empty());
    assert_eq!(spec.activation, ActivationFunction::Tanh);
    assert_eq!(spec.regularization, Regularization::L1);
    assert!(!spec.init_zero);

    let missing = NetworkSpec::load_json("/definitely/not/here.json");
    assert!(matches!(missing, Err(NetworkError::Io(_))));
}

#[test]
fn test_spec_input_for_point() {
    let spec = NetworkSpec {
        inputs: vec![
            InputFeature::XSquared,
            InputFeature::Y,
            InputFeature::XTimesY,
            InputFeature::SinX,
        ],
        ..NetworkSpec::default()
    };
    assert_eq!(spec.input_ids(), vec!["xSquared", "y", "xTimesY", "sinX"]);

    let input = spec.input_for(3.0, -0.5);
    assert_eq!(input, vec![9.0, -0.5, -1.5, 3.0f64.sin()]);

    let mut network = spec.build().unwrap();
    assert!(network.forward(&input).is_ok());
    let outputs: Vec<f64> = network.layers()[0].iter().map(|n| n.output).collect();
    assert_eq!(outputs, input);
}

#[test]
fn test_spec_rejects_repeated_feature() {
    let spec = NetworkSpec {
        inputs: vec![InputFeature::X, InputFeature::Y, InputFeature::X],
        ..NetworkSpec::default()
    };
    assert!(matches!(spec.build(), Err(NetworkError::Config { .. })));
}
