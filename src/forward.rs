use ndarray::Array2;

use crate::activation::{Activation, ActivationCache};
use crate::error::{Error, Result};
use crate::params::{LayerParams, Parameters};

/// Operands of a layer's linear transform as captured at forward time.
#[derive(Debug, Clone)]
pub struct LinearCache {
    pub a_prev: Array2<f64>,
    pub weights: Array2<f64>,
    pub bias: Array2<f64>,
}

/// Everything one backward step needs for one layer. Produced exactly once
/// per layer per forward pass and consumed exactly once by the matching
/// backward step.
#[derive(Debug, Clone)]
pub struct LayerCache {
    pub linear: LinearCache,
    pub activation: ActivationCache,
    pub kind: Activation,
}

/// Z = W·A + b, with b broadcast across example columns.
pub fn linear_forward(
    a: &Array2<f64>,
    weights: &Array2<f64>,
    bias: &Array2<f64>,
    layer: usize,
) -> Result<(Array2<f64>, LinearCache)> {
    if weights.ncols() != a.nrows() {
        return Err(Error::shape(
            "linear_forward",
            layer,
            (weights.ncols(), a.ncols()),
            a.dim(),
        ));
    }
    if bias.dim() != (weights.nrows(), 1) {
        return Err(Error::shape(
            "linear_forward bias",
            layer,
            (weights.nrows(), 1),
            bias.dim(),
        ));
    }
    let z = weights.dot(a) + bias;
    let cache = LinearCache {
        a_prev: a.clone(),
        weights: weights.clone(),
        bias: bias.clone(),
    };
    Ok((z, cache))
}

/// Linear transform followed by the layer's activation.
pub fn linear_activation_forward(
    a_prev: &Array2<f64>,
    params: &LayerParams,
    kind: Activation,
    layer: usize,
) -> Result<(Array2<f64>, LayerCache)> {
    let (z, linear) = linear_forward(a_prev, &params.weights, &params.bias, layer)?;
    let (a, activation) = kind.forward(&z);
    Ok((
        a,
        LayerCache {
            linear,
            activation,
            kind,
        },
    ))
}

/// Propagate X through all layers: [Linear -> ReLU] × (L-1), then
/// Linear -> Sigmoid.
///
/// Returns the output activations AL of shape (output width, n_examples) and
/// the per-layer caches in layer order; backward propagation consumes them
/// in reverse.
pub fn model_forward(
    x: &Array2<f64>,
    params: &Parameters,
) -> Result<(Array2<f64>, Vec<LayerCache>)> {
    let n_layers = params.n_layers();
    let mut caches = Vec::with_capacity(n_layers);
    let mut a = x.clone();
    for layer in 1..=n_layers {
        let kind = Activation::for_layer(layer, n_layers);
        let (next, cache) = linear_activation_forward(&a, params.layer(layer), kind, layer)?;
        a = next;
        caches.push(cache);
    }
    Ok((a, caches))
}

#[cfg(test)]
mod tests {
    use crate::assert_rel_eq_arr2;
    use crate::params::LayerDims;

    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr2;

    #[test]
    fn linear_forward_values() {
        let weights = arr2(&[[1.0, -1.0], [0.5, 2.0]]);
        let a = arr2(&[[1.0, 0.0], [0.5, 1.0]]);
        let bias = arr2(&[[0.5], [-0.5]]);
        let (z, cache) = linear_forward(&a, &weights, &bias, 1).unwrap();
        assert_rel_eq_arr2!(z, arr2(&[[1.0, -0.5], [1.0, 1.5]]));
        assert_rel_eq_arr2!(cache.a_prev, a);
        assert_rel_eq_arr2!(cache.weights, weights);
        assert_rel_eq_arr2!(cache.bias, bias);
    }

    #[test]
    fn linear_forward_rejects_mismatched_operands() {
        let weights = arr2(&[[1.0, -1.0, 2.0]]);
        let a = arr2(&[[1.0, 0.0], [0.5, 1.0]]);
        let bias = arr2(&[[0.0]]);
        let err = linear_forward(&a, &weights, &bias, 3).unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                op: "linear_forward",
                layer: 3,
                expected: (3, 2),
                actual: (2, 2),
            }
        );
    }

    #[test]
    fn model_forward_output_is_in_sigmoid_range() {
        let dims = LayerDims::new(vec![3, 5, 4, 1]).unwrap();
        let params = Parameters::init(&dims, 11);
        let x = arr2(&[
            [0.3, -0.2, 0.6, -0.9],
            [0.5, 0.8, -0.4, 0.1],
            [-0.7, 0.2, 0.9, 0.4],
        ]);
        let (al, caches) = model_forward(&x, &params).unwrap();
        assert_eq!(al.dim(), (1, 4));
        assert!(al.iter().all(|&p| p > 0.0 && p < 1.0));
        assert_eq!(caches.len(), 3);
        assert_eq!(caches[0].kind, Activation::Relu);
        assert_eq!(caches[1].kind, Activation::Relu);
        assert_eq!(caches[2].kind, Activation::Sigmoid);
    }

    #[test]
    fn single_layer_network_is_logistic_regression() {
        let dims = LayerDims::new(vec![2, 1]).unwrap();
        let params = Parameters::init(&dims, 5);
        let x = arr2(&[[1.0, -1.0], [0.5, 2.0]]);
        let (al, caches) = model_forward(&x, &params).unwrap();
        assert_eq!(al.dim(), (1, 2));
        assert_eq!(caches.len(), 1);
        assert_eq!(caches[0].kind, Activation::Sigmoid);
    }

    #[test]
    fn model_forward_rejects_wrong_feature_count() {
        let dims = LayerDims::new(vec![3, 2, 1]).unwrap();
        let params = Parameters::init(&dims, 1);
        let x = arr2(&[[1.0], [2.0]]);
        assert!(matches!(
            model_forward(&x, &params),
            Err(Error::ShapeMismatch { layer: 1, .. })
        ));
    }
}
