use ndarray::{Array2, Axis};

use crate::cost::cost_gradient;
use crate::error::{Error, Result};
use crate::forward::{LayerCache, LinearCache};

/// Gradients of one layer's weights and bias; shapes match the parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerGrads {
    pub dw: Array2<f64>,
    pub db: Array2<f64>,
}

/// Per-layer gradients of the cost, indexed like `Parameters` (1-based).
/// Recomputed from scratch every iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    layers: Vec<LayerGrads>,
}

impl Gradients {
    pub fn from_layers(layers: Vec<LayerGrads>) -> Self {
        Self { layers }
    }

    pub fn n_layers(&self) -> usize {
        self.layers.len()
    }

    /// Gradients of layer `layer` (1-based).
    pub fn layer(&self, layer: usize) -> &LayerGrads {
        &self.layers[layer - 1]
    }
}

/// Backward step through one linear transform.
///
/// dW = (1/m)·dZ·A_prevᵀ, db = (1/m)·Σ dZ over examples (column shape kept),
/// dA_prev = Wᵀ·dZ, where m is the example count of the cached A_prev.
pub fn linear_backward(
    dz: &Array2<f64>,
    cache: &LinearCache,
    layer: usize,
) -> Result<(Array2<f64>, Array2<f64>, Array2<f64>)> {
    debug_assert_eq!(cache.bias.dim(), (cache.weights.nrows(), 1));
    let m = cache.a_prev.ncols();
    if m == 0 {
        return Err(Error::EmptyBatch);
    }
    if dz.dim() != (cache.weights.nrows(), m) {
        return Err(Error::shape(
            "linear_backward",
            layer,
            (cache.weights.nrows(), m),
            dz.dim(),
        ));
    }
    let scale = 1.0 / m as f64;
    let mut dw = dz.dot(&cache.a_prev.t());
    dw *= scale;
    let mut db = dz.sum_axis(Axis(1)).insert_axis(Axis(1));
    db *= scale;
    let da_prev = cache.weights.t().dot(dz);
    Ok((da_prev, dw, db))
}

/// Backward step through one Linear -> Activation layer: undo the
/// activation to get dZ, then the linear transform. Consumes the layer's
/// cache.
pub fn linear_activation_backward(
    da: &Array2<f64>,
    cache: LayerCache,
    layer: usize,
) -> Result<(Array2<f64>, Array2<f64>, Array2<f64>)> {
    let dz = cache.kind.backward(da, cache.activation);
    linear_backward(&dz, &cache.linear, layer)
}

/// Full backward pass: seed dAL from the cost gradient, then walk the
/// layers from L down to 1, consuming each cache exactly once.
pub fn model_backward(
    al: &Array2<f64>,
    y: &Array2<f64>,
    caches: Vec<LayerCache>,
) -> Result<Gradients> {
    assert_eq!(
        al.dim(),
        y.dim(),
        "model_backward: AL and Y must have identical shapes"
    );
    assert!(!caches.is_empty(), "model_backward: no layer caches");
    if al.ncols() == 0 {
        return Err(Error::EmptyBatch);
    }

    let mut da = cost_gradient(al, y);
    let mut reversed = Vec::with_capacity(caches.len());
    for (index, cache) in caches.into_iter().enumerate().rev() {
        let layer = index + 1;
        let (da_prev, dw, db) = linear_activation_backward(&da, cache, layer)?;
        da = da_prev;
        reversed.push(LayerGrads { dw, db });
    }
    reversed.reverse();
    Ok(Gradients { layers: reversed })
}
