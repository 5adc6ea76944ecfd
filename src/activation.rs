use ndarray::Array2;

/// Nonlinearity applied after a layer's linear transform.
///
/// The architecture is fixed: every hidden layer uses `Relu` and the output
/// layer uses `Sigmoid`. `for_layer` is the single place encoding that rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Relu,
    Sigmoid,
}

impl Activation {
    /// Activation of layer `layer` (1-based) in an `n_layers`-deep network.
    pub fn for_layer(layer: usize, n_layers: usize) -> Self {
        if layer == n_layers {
            Activation::Sigmoid
        } else {
            Activation::Relu
        }
    }

    pub fn forward(self, z: &Array2<f64>) -> (Array2<f64>, ActivationCache) {
        match self {
            Activation::Relu => relu(z),
            Activation::Sigmoid => sigmoid(z),
        }
    }

    pub fn backward(self, da: &Array2<f64>, cache: ActivationCache) -> Array2<f64> {
        match self {
            Activation::Relu => relu_backward(da, cache),
            Activation::Sigmoid => sigmoid_backward(da, cache),
        }
    }
}

/// Pre-activation matrix Z saved at forward time for the backward pass.
#[derive(Debug, Clone)]
pub struct ActivationCache {
    pub z: Array2<f64>,
}

fn sigmoid_one(z: f64) -> f64 {
    // Branch on the sign so exp never overflows.
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// A = 1 / (1 + exp(-Z)) elementwise.
pub fn sigmoid(z: &Array2<f64>) -> (Array2<f64>, ActivationCache) {
    let a = z.map(|&v| sigmoid_one(v));
    (a, ActivationCache { z: z.clone() })
}

/// A = max(0, Z) elementwise.
pub fn relu(z: &Array2<f64>) -> (Array2<f64>, ActivationCache) {
    let a = z.map(|&v| if v > 0.0 { v } else { 0.0 });
    (a, ActivationCache { z: z.clone() })
}

/// dZ = dA * s * (1 - s) where s = sigmoid(Z).
pub fn sigmoid_backward(da: &Array2<f64>, cache: ActivationCache) -> Array2<f64> {
    assert_eq!(
        da.dim(),
        cache.z.dim(),
        "sigmoid_backward: dA and cached Z must have identical shapes"
    );
    let mut dz = cache.z;
    dz.zip_mut_with(da, |z, &da| {
        let s = sigmoid_one(*z);
        *z = da * s * (1.0 - s);
    });
    dz
}

/// dZ = dA where Z > 0, exactly 0 where Z <= 0.
pub fn relu_backward(da: &Array2<f64>, cache: ActivationCache) -> Array2<f64> {
    assert_eq!(
        da.dim(),
        cache.z.dim(),
        "relu_backward: dA and cached Z must have identical shapes"
    );
    let mut dz = cache.z;
    dz.zip_mut_with(da, |z, &da| {
        *z = if *z > 0.0 { da } else { 0.0 };
    });
    dz
}
