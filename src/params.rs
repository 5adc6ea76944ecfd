use ndarray::{Array, Array2};
use ndarray_rand::rand::{rngs::StdRng, SeedableRng};
use ndarray_rand::rand_distr::StandardNormal;
use ndarray_rand::RandomExt;

use crate::error::{Error, Result};

/// Layer widths of the network, input first.
///
/// Entry 0 is the input feature count; entries 1..=L are the widths of the
/// trainable layers. Validated on construction: at least two entries, all
/// positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerDims(Vec<usize>);

impl LayerDims {
    pub fn new(dims: Vec<usize>) -> Result<Self> {
        if dims.len() < 2 {
            return Err(Error::TooFewLayerDims(dims.len()));
        }
        if let Some(index) = dims.iter().position(|&width| width == 0) {
            return Err(Error::ZeroLayerWidth { index });
        }
        Ok(Self(dims))
    }

    /// Number of trainable layers (the input does not count).
    pub fn n_layers(&self) -> usize {
        self.0.len() - 1
    }

    pub fn input_width(&self) -> usize {
        self.0[0]
    }

    pub fn output_width(&self) -> usize {
        self.0[self.0.len() - 1]
    }

    /// Width of layer `layer`; `width(0)` is the input width.
    pub fn width(&self, layer: usize) -> usize {
        self.0[layer]
    }
}

/// Weights and bias of a single layer.
///
/// For layer l, `weights` is (dims[l], dims[l-1]) and `bias` is (dims[l], 1).
#[derive(Debug, Clone, PartialEq)]
pub struct LayerParams {
    pub weights: Array2<f64>,
    pub bias: Array2<f64>,
}

/// Per-layer parameters of the whole network, indexed by 1-based layer
/// number. Owned by a single training run and updated in place after each
/// iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    layers: Vec<LayerParams>,
}

impl Parameters {
    /// Draw fresh parameters for the given layer sizes.
    ///
    /// Weights are sampled from Normal(0, 1) scaled by 1/sqrt(dims[l-1]) so
    /// pre-activation variance stays roughly constant across depth; biases
    /// start at zero. The same seed and dims reproduce identical parameters.
    pub fn init(dims: &LayerDims, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let layers = (1..=dims.n_layers())
            .map(|l| {
                let (width, prev_width) = (dims.width(l), dims.width(l - 1));
                let scale = 1.0 / (prev_width as f64).sqrt();
                let weights =
                    Array::random_using((width, prev_width), StandardNormal, &mut rng) * scale;
                let bias = Array2::zeros((width, 1));
                LayerParams { weights, bias }
            })
            .collect();
        Self { layers }
    }

    pub fn from_layers(layers: Vec<LayerParams>) -> Self {
        Self { layers }
    }

    pub fn n_layers(&self) -> usize {
        self.layers.len()
    }

    /// Parameters of layer `layer` (1-based).
    pub fn layer(&self, layer: usize) -> &LayerParams {
        &self.layers[layer - 1]
    }

    pub fn layer_mut(&mut self, layer: usize) -> &mut LayerParams {
        &mut self.layers[layer - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_dims() {
        assert_eq!(LayerDims::new(vec![4]), Err(Error::TooFewLayerDims(1)));
        assert_eq!(
            LayerDims::new(vec![4, 0, 1]),
            Err(Error::ZeroLayerWidth { index: 1 })
        );
    }

    #[test]
    fn init_shapes_follow_dims() {
        let dims = LayerDims::new(vec![7, 5, 3, 1]).unwrap();
        let params = Parameters::init(&dims, 1);
        assert_eq!(params.n_layers(), 3);
        assert_eq!(params.layer(1).weights.dim(), (5, 7));
        assert_eq!(params.layer(1).bias.dim(), (5, 1));
        assert_eq!(params.layer(2).weights.dim(), (3, 5));
        assert_eq!(params.layer(3).weights.dim(), (1, 3));
        assert_eq!(params.layer(3).bias.dim(), (1, 1));
    }

    #[test]
    fn biases_start_at_zero() {
        let dims = LayerDims::new(vec![3, 4, 1]).unwrap();
        let params = Parameters::init(&dims, 9);
        for l in 1..=params.n_layers() {
            assert!(params.layer(l).bias.iter().all(|&b| b == 0.0));
        }
    }

    #[test]
    fn same_seed_reproduces_identical_parameters() {
        let dims = LayerDims::new(vec![4, 6, 2, 1]).unwrap();
        let a = Parameters::init(&dims, 42);
        let b = Parameters::init(&dims, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let dims = LayerDims::new(vec![4, 3, 1]).unwrap();
        let a = Parameters::init(&dims, 1);
        let b = Parameters::init(&dims, 2);
        assert_ne!(a.layer(1).weights, b.layer(1).weights);
    }
}
